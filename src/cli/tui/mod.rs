/// Terminal User Interface module for interactive commands
pub mod browse;

use crate::browser::CatalogController;
use crate::Result;

/// Run the interactive catalog browser
pub async fn run_browser(controller: CatalogController) -> Result<()> {
    browse::run(controller).await
}
