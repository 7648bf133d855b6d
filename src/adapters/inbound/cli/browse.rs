use crate::application::services::loading;
use crate::domain::models::item::DescriptionRule;
use crate::ports::outbound::source::CatalogueSource;
use crate::ports::outbound::view::SessionView;

pub fn browse(
    source: &dyn CatalogueSource,
    rule: DescriptionRule,
    view: &dyn SessionView,
) -> anyhow::Result<()> {
    let catalogue = loading::load_catalogue(source, rule)?;

    view.section("catalogue");
    view.block(&catalogue.to_string());
    view.status(&format!("{} items available", catalogue.len()));
    Ok(())
}
