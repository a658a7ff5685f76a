use anyhow::{anyhow, Result};
use codetype_lib::Route;

use crate::output::{print_info_page, OutputFormat};

/// Renders a static route. No request is made.
pub fn run(route: Route, format: &OutputFormat) -> Result<()> {
    let page = route
        .info_page()
        .ok_or_else(|| anyhow!("{} is not a static page", route.path()))?;
    print_info_page(page, format)
}
