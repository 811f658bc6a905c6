// src/render/equipment.rs

//! Equipment listing

use super::{link, Markdown};
use crate::catalog::Groups;

/// Render `equipment.md`: one line per equipment item
///
/// With `with_links` each line also links the recipes using that item.
pub fn render_equipment_index(groups: &Groups<'_>, details_dir: &str, with_links: bool) -> String {
    let mut md = Markdown::titled("Equipment");
    for (item, recipes) in groups.sections() {
        if with_links {
            let links: Vec<String> = recipes
                .iter()
                .map(|r| link(&r.name, &r.page_link(details_dir)))
                .collect();
            md.item(&format!("{}: {}", item, links.join(", ")));
        } else {
            md.item(item);
        }
    }
    md.finish()
}
