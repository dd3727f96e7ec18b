//! GrandPrix ticket booking core
//!
//! Main application entry point

use tracing::{info, warn};

use GrandPrix::{
    config::Settings,
    database::DataManager,
    services::reports,
    utils::{helpers::{format_date, format_price}, logging},
};

fn main() -> anyhow::Result<()> {
    // Pick up a local .env before reading the environment
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the file writer on drop
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", GrandPrix::info());

    let manager = DataManager::open(&settings)?;

    for event in manager.events.list() {
        match manager.remaining_capacity(event.id) {
            Ok(remaining) => info!(
                event_id = event.id,
                name = %event.name,
                date = %format_date(event.date),
                capacity = event.capacity,
                remaining,
                "Event availability"
            ),
            Err(e) => warn!(event_id = event.id, error = %e, "Could not compute availability"),
        }
    }

    for sales in reports::event_sales(&manager) {
        info!(
            event_id = sales.event_id,
            tickets_sold = sales.tickets_sold,
            revenue = %format_price(sales.revenue),
            "Event sales"
        );
    }

    let totals = reports::totals(&manager);
    info!(
        bookings = totals.bookings,
        tickets = totals.tickets,
        revenue = %format_price(totals.revenue),
        "Sales summary"
    );

    Ok(())
}
