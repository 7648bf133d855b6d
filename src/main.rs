use shopfront::adapters::inbound::cli::{CommandLine, Commands, browse, customers, shop};
use shopfront::adapters::outbound::customer_file::CustomerFile;
use shopfront::adapters::outbound::records::{LineRecordFile, StaticRecords};
use shopfront::adapters::outbound::terminal::logging;
use shopfront::adapters::outbound::terminal::view::TerminalView;
use shopfront::domain::models::customer::PaymentRule;
use shopfront::domain::models::item::DescriptionRule;
use shopfront::ports::outbound::source::CatalogueSource;
use shopfront::ports::outbound::store::CustomerRecordStore;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    logging::init();

    let view = TerminalView;

    let description_rule = if commands.require_description {
        DescriptionRule::Required
    } else {
        DescriptionRule::Optional
    };
    let payment_rule = if commands.collect_payment {
        PaymentRule::Required
    } else {
        PaymentRule::NotCollected
    };

    let source: Box<dyn CatalogueSource> = match &commands.catalogue {
        Some(path) => Box::new(LineRecordFile::new(path)),
        None => Box::new(StaticRecords),
    };
    let store: Option<CustomerFile> = commands.customers.as_ref().map(CustomerFile::new);

    match commands.command {
        Commands::Browse => browse::browse(source.as_ref(), description_rule, &view),
        Commands::Shop => {
            let options = shop::ShopOptions {
                description_rule,
                payment_rule,
            };
            shop::shop(
                source.as_ref(),
                store.as_ref().map(|s| s as &dyn CustomerRecordStore),
                &options,
                &view,
            )
        }
        Commands::Customers => match &store {
            Some(store) => customers::customers(store, &view),
            None => anyhow::bail!("the customers command needs --customers <path>"),
        },
    }
}
