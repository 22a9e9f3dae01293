use cinedex_lib::{ActorPatch, CatalogError, EntityKind, NewActor};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::ActorAction;

use super::movie::{log_actors, log_movies};
use super::{Session, log_page_footer};

pub(crate) fn run_actor(session: &Session, action: ActorAction) -> Result<(), CliError> {
    let svc = &session.service;
    match action {
        ActorAction::Create { name, birth_date } => {
            let actor = svc.create_actor(NewActor::new(name, birth_date))?;
            session.emit(&actor, |a| {
                log::info!(
                    "Created actor {} {}",
                    a.id.if_supports_color(Stdout, |t| t.cyan()),
                    a.name,
                );
            })
        }
        ActorAction::Get { id } => {
            let actor = svc.find_actor(id)?;
            session.emit(&actor, |a| log_actors(std::slice::from_ref(a)))
        }
        ActorAction::List { name, paging } => match paging.requested() {
            Some((page, size)) => {
                let page = svc.actor_page(name.as_deref(), page, size)?;
                session.emit(&page, |p| {
                    log_actors(&p.items);
                    log_page_footer(p);
                })
            }
            None => {
                let actors = svc.list_actors(name.as_deref())?;
                session.emit(&actors, |a| log_actors(a))
            }
        },
        ActorAction::Update {
            id,
            name,
            birth_date,
        } => {
            let actor = svc
                .update_actor(id, ActorPatch { name, birth_date })?
                .ok_or(CatalogError::not_found(EntityKind::Actor, id))?;
            session.emit(&actor, |a| {
                log::info!("Updated actor {}", a.id);
                log_actors(std::slice::from_ref(a));
            })
        }
        ActorAction::Delete { id, force } => {
            svc.delete_actor(id, force)?;
            if !session.json {
                log::info!("Deleted actor {id}");
            }
            Ok(())
        }
        ActorAction::Movies { id } => {
            let movies = svc.movies_for_actor(id)?;
            session.emit(&movies, |m| log_movies(m))
        }
    }
}
