//! The interactive shopping loop.
//!
//! Reads one command per line from stdin and applies it to the session.
//! Domain failures are presented and the loop continues; only I/O failures
//! end the session early.

use crate::application::services::loading;
use crate::application::services::session::ShoppingSession;
use crate::domain::errors::DomainError;
use crate::domain::models::customer::{CustomerInfo, PaymentRule};
use crate::domain::models::item::DescriptionRule;
use crate::ports::outbound::source::CatalogueSource;
use crate::ports::outbound::store::CustomerRecordStore;
use crate::ports::outbound::view::SessionView;
use anyhow::Context;
use std::io::{self, BufRead, Write};

const COMMANDS: &str =
    "add NAME, remove NAME, cart, catalogue, checkout, orders, quit";

pub struct ShopOptions {
    pub description_rule: DescriptionRule,
    pub payment_rule: PaymentRule,
}

enum LoopAction {
    Continue,
    Quit,
}

pub fn shop(
    source: &dyn CatalogueSource,
    store: Option<&dyn CustomerRecordStore>,
    options: &ShopOptions,
    view: &dyn SessionView,
) -> anyhow::Result<()> {
    let catalogue = loading::load_catalogue(source, options.description_rule)?;
    let mut session = ShoppingSession::new(catalogue);

    view.section("shopfront");
    view.status(&format!("commands: {COMMANDS}"));

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        prompt()?;
        line.clear();
        if stdin.lock().read_line(&mut line).context("reading stdin")? == 0 {
            break;
        }
        match apply_command(&mut session, line.trim(), store, options.payment_rule, view)? {
            LoopAction::Quit => break,
            LoopAction::Continue => {}
        }
    }

    if !session.history().is_empty() {
        view.section("session summary");
        view.block(&session.history().to_string());
    }
    Ok(())
}

/// Applies one line of user input to the session.
fn apply_command(
    session: &mut ShoppingSession,
    input: &str,
    store: Option<&dyn CustomerRecordStore>,
    payment_rule: PaymentRule,
    view: &dyn SessionView,
) -> anyhow::Result<LoopAction> {
    let (command, argument) = match input.split_once(' ') {
        Some((command, argument)) => (command, argument.trim()),
        None => (input, ""),
    };

    match (command.to_lowercase().as_str(), argument) {
        ("", _) => {}
        ("add", name) if !name.is_empty() => match session.add_to_cart(name) {
            Ok(()) => view.status(&format!(
                "added; cart total is {}",
                session.cart().total_price()
            )),
            Err(err) => view.error(err.into()),
        },
        ("remove", name) if !name.is_empty() => match session.remove_from_cart(name) {
            Ok(removed) => view.status(&format!(
                "removed {}; cart total is {}",
                removed.name(),
                session.cart().total_price()
            )),
            Err(err) => view.error(err.into()),
        },
        ("add", _) | ("remove", _) => {
            view.status(&format!("missing item name; try: {command} NAME"));
        }
        ("cart", _) => view.block(&session.cart().to_string()),
        ("catalogue", _) => view.block(&session.catalogue().to_string()),
        ("orders", _) => view.block(&session.history().to_string()),
        ("checkout", _) => checkout(session, store, payment_rule, view)?,
        ("quit", _) | ("q", _) | ("exit", _) => return Ok(LoopAction::Quit),
        _ => view.status(&format!("unknown command; try: {COMMANDS}")),
    }
    Ok(LoopAction::Continue)
}

fn checkout(
    session: &mut ShoppingSession,
    store: Option<&dyn CustomerRecordStore>,
    payment_rule: PaymentRule,
    view: &dyn SessionView,
) -> anyhow::Result<()> {
    // An empty cart is refused before any customer details are requested.
    if session.cart().is_empty() {
        view.error(DomainError::EmptyOrder.into());
        return Ok(());
    }

    let placed = match store {
        Some(store) => {
            let info = match collect_customer(payment_rule) {
                Ok(info) => info,
                Err(err) => {
                    view.error(err);
                    return Ok(());
                }
            };
            session.place_order_with_customer(&info, store)
        }
        None => session.place_order().map_err(Into::into),
    };

    match placed {
        Ok(order) => {
            view.section("order placed");
            view.block(&order.to_string());
        }
        Err(err) => view.error(err),
    }
    Ok(())
}

fn collect_customer(payment_rule: PaymentRule) -> anyhow::Result<CustomerInfo> {
    let name = ask("Name")?;
    let shipping_address = ask("Shipping address")?;
    let email = ask("Email address")?;
    let payment_details = match payment_rule {
        PaymentRule::Required => Some(ask("Credit card details")?),
        PaymentRule::NotCollected => None,
    };

    Ok(CustomerInfo::new(
        name,
        shipping_address,
        email,
        payment_details,
        payment_rule,
    )?)
}

fn ask(label: &str) -> anyhow::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("reading stdin")?;
    Ok(answer.trim().to_owned())
}

fn prompt() -> anyhow::Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}
