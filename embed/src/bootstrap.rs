use dns::Resolver;
use futures::future::join_all;
use log::{info, warn};

use crate::{controller::EmbedController, page::Document, render::RenderOptions};

/// Builds a controller for every embed element in `scope` (an element id,
/// the whole body when `None`) and resolves once each has rendered once.
pub async fn embed_all<'d>(
    document: &'d mut Document,
    scope: Option<&str>,
    resolver: &Resolver,
    options: &RenderOptions,
) -> Vec<EmbedController<'d>> {
    let root = match scope {
        None => document.body_mut(),
        Some(id) => match document.body_mut().find_by_id_mut(id) {
            Some(root) => root,
            None => {
                warn!("scope #{} not found, no embeds", id);
                return Vec::new();
            }
        },
    };

    let mut controllers = root
        .embeds_mut()
        .into_iter()
        .map(|element| EmbedController::new(element, resolver.clone(), options.clone()))
        .collect::<Vec<_>>();
    info!("found {} embeds", controllers.len());

    join_all(controllers.iter_mut().map(|controller| controller.load())).await;

    controllers
}
