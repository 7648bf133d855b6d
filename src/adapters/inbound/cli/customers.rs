use crate::ports::outbound::store::CustomerRecordStore;
use crate::ports::outbound::view::SessionView;

pub fn customers(store: &dyn CustomerRecordStore, view: &dyn SessionView) -> anyhow::Result<()> {
    let records = store.load_all()?;
    if records.is_empty() {
        view.status("no customer records yet");
        return Ok(());
    }

    view.section("customers");
    for (position, record) in records.iter().enumerate() {
        let payment = if record.payment_details.is_empty() {
            String::new()
        } else {
            format!(" [{}]", record.payment_details)
        };
        view.block(&format!(
            "{}. {} <{}> {}{}",
            position + 1,
            record.name,
            record.email,
            record.shipping_address,
            payment
        ));
    }
    view.status(&format!("{} records", records.len()));
    Ok(())
}
