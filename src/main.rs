use std::env;
use std::sync::Arc;

use shift_finder::app_state::{AppState, ShiftRepositoryType};
use shift_finder::services::{
    HttpShiftRepository, StaticLocationProvider, StaticPermissionGateway,
    StaticShiftRepository,
};
use shift_finder::store::ShiftStore;
use shift_finder::utils::constants::{self, http, SHIFTS_API_URL};
use shift_finder::utils::format::{
    format_date, format_rating, progress_color,
};
use shift_finder::utils::tracing::init_tracing;
use shift_finder::workflow::{RunOutcome, WorkflowOrchestrator};

/// Demo wiring: runs the discovery workflow against the static dataset
/// (or the live endpoint with SHIFT_DATA_SOURCE=http) and prints the
/// resulting list the way the list screen would render it.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    init_tracing()?;

    let repository = build_repository()?;
    let store = Arc::new(ShiftStore::new());
    let state = AppState::new(
        Arc::new(StaticPermissionGateway::granting()),
        Arc::new(StaticLocationProvider::with_fix(45.10303, 38.916033)),
        repository,
        store.clone(),
    );
    let orchestrator = WorkflowOrchestrator::new(state);

    match orchestrator.run().await {
        RunOutcome::Ready => {
            println!("Доступные смены: {}", store.shift_count());
            for shift in store.shifts() {
                let date = format_date(&shift.date_start_by_city)
                    .unwrap_or_else(|_| shift.date_start_by_city.clone());
                println!(
                    "- {} | {} | {}–{} | {}/{} человек ({}) | {} ₽ | {}",
                    shift.company_name,
                    date,
                    shift.time_start_by_city,
                    shift.time_end_by_city,
                    shift.current_workers,
                    shift.plan_workers,
                    progress_color(shift.current_workers, shift.plan_workers)
                        .hex(),
                    shift.price_worker,
                    format_rating(shift.customer_rating),
                );
            }
        }
        RunOutcome::PermissionDenied => {
            println!(
                "Приложению нужен доступ к геолокации для поиска смен. \
                 Пожалуйста, разрешите доступ в настройках устройства."
            );
        }
        outcome => {
            println!(
                "Не удалось получить данные ({outcome:?}). \
                 Проверьте подключение к интернету."
            );
        }
    }

    Ok(())
}

fn build_repository() -> color_eyre::Result<ShiftRepositoryType> {
    let source = env::var(constants::env::SHIFT_DATA_SOURCE_ENV_VAR)
        .unwrap_or_else(|_| String::from("static"));

    let repository: ShiftRepositoryType = match source.as_str() {
        "http" => {
            let http_client = reqwest::Client::builder()
                .timeout(http::TIMEOUT)
                .build()?;
            Arc::new(HttpShiftRepository::new(
                http_client,
                SHIFTS_API_URL.clone(),
                constants::SHIFTS_API_KEY.clone(),
            ))
        }
        _ => Arc::new(StaticShiftRepository::new()),
    };
    Ok(repository)
}
