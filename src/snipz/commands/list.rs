use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::menu::render_node;

pub fn run(catalog: &Catalog) -> CmdResult {
    let menu: Vec<_> = render_node(catalog.root()).collect();
    let mut result = CmdResult::default();
    if menu.is_empty() {
        result.add_message(CmdMessage::info("The catalog is empty."));
    }
    result.with_menu(menu)
}
