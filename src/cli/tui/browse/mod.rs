/// Interactive catalog browser implementation
pub mod app;
pub mod events;
pub mod modal;
pub mod screens;
pub mod state;
pub mod theme;

use crate::browser::CatalogController;
use crate::Result;

/// Entry point for the browser
pub async fn run(controller: CatalogController) -> Result<()> {
    let app = app::App::new(controller);
    app.run().await
}
