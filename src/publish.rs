use std::{io, path::Path};

use embed::{Document, Element, EmbedController};

use crate::utils::write;

/// Copies the current state of every widget into a standalone page.
pub fn snapshot(title: &str, controllers: &[EmbedController<'_>]) -> Document {
    Document::new(title).with_body(
        controllers
            .iter()
            .fold(Element::new("body"), |body, controller| {
                body.with_child(controller.element().clone())
            }),
    )
}

/// Writes the page to `output`, or stdout.
pub async fn publish(
    title: &str,
    controllers: &[EmbedController<'_>],
    output: Option<&Path>,
) -> io::Result<()> {
    let html = snapshot(title, controllers).to_html();
    match output {
        Some(path) => {
            write(path, &html).await?;
            log::info!("wrote {:?}", path);
        }
        None => print!("{}", html),
    }
    Ok(())
}
