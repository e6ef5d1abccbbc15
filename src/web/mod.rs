use std::fmt::Write as _;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};

use crate::error::Result;
use crate::orders::{JobOrder, JobStatus, OrderCatalog};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<OrderCatalog>,
}

#[derive(Serialize)]
struct JobOrderResponse {
    title: String,
    assigned_to: String,
    status: JobStatus,
    status_color: &'static str,
    expected_date: Option<NaiveDate>,
    completed: bool,
    completion_date: Option<NaiveDate>,
}

impl From<&JobOrder> for JobOrderResponse {
    fn from(order: &JobOrder) -> Self {
        Self {
            title: order.title.clone(),
            assigned_to: order.assigned_to.clone(),
            status: order.status,
            status_color: order.status.color(),
            expected_date: order.expected_date,
            completed: order.is_completed(),
            completion_date: order.completion_date,
        }
    }
}

/// Build the route table. Public so tests can drive the real handlers.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/job-orders", get(job_orders_page_handler))
        .route("/api/job-orders", get(list_job_orders_handler))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until the shutdown token fires.
pub async fn run_server(
    addr: SocketAddr,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<()> {
    let app = router(state);

    tracing::info!(addr = %addr, "Starting job-order server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    Ok(())
}

async fn index_handler() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

async fn job_orders_page_handler(State(state): State<AppState>) -> Html<String> {
    Html(render_orders_page(state.catalog.all()))
}

async fn list_job_orders_handler(State(state): State<AppState>) -> impl IntoResponse {
    let orders: Vec<JobOrderResponse> = state
        .catalog
        .all()
        .iter()
        .map(JobOrderResponse::from)
        .collect();

    Json(orders)
}

/// Render the full catalog as an HTML document, one card per order.
fn render_orders_page(orders: &[JobOrder]) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Job Orders - Confix</title>\n\
         <script src=\"https://cdn.tailwindcss.com\"></script>\n\
         </head>\n\
         <body class=\"bg-gray-100\">\n\
         <main class=\"max-w-3xl mx-auto py-10 px-4\">\n\
         <h1 class=\"text-2xl font-bold text-gray-900 mb-6\">Job Orders</h1>\n\
         <div class=\"job-orders-list\">\n",
    );

    if orders.is_empty() {
        page.push_str("<div class=\"text-gray-500\">No job orders found.</div>\n");
    }

    for order in orders {
        write_order_card(&mut page, order);
    }

    page.push_str("</div>\n</main>\n</body>\n</html>\n");
    page
}

fn write_order_card(page: &mut String, order: &JobOrder) {
    let _ = write!(
        page,
        "<div class=\"border border-gray-300 rounded-lg p-6 shadow-sm hover:shadow-md transition duration-300 mb-4 bg-white\">\n\
         <h3 class=\"text-lg font-semibold text-blue-700\">{title}</h3>\n\
         <p class=\"text-gray-700\">Assigned to: {assigned_to}</p>\n\
         <p class=\"text-gray-700\">Status: <span class=\"font-semibold {color}\">{status}</span></p>\n",
        title = escape_html(&order.title),
        assigned_to = escape_html(&order.assigned_to),
        color = order.status.color(),
        status = order.status,
    );

    match order.status {
        JobStatus::Completed => {
            if let Some(date) = order.completion_date {
                let _ = writeln!(page, "<p class=\"text-gray-700\">Completed on: {date}</p>");
            }
        }
        JobStatus::Pending => {
            if let Some(date) = order.expected_date {
                let _ = writeln!(
                    page,
                    "<p class=\"text-gray-700\">Expected Completion: {date}</p>"
                );
            }
        }
        JobStatus::Overdue => {
            if let Some(date) = order.expected_date {
                let _ = writeln!(page, "<p class=\"text-gray-700\">Was due on: {date}</p>");
            }
        }
    }

    page.push_str("</div>\n");
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn escape_html_replaces_markup_characters() {
        assert_eq!(
            escape_html("<b>\"Fix\" & 'paint'</b>"),
            "&lt;b&gt;&quot;Fix&quot; &amp; &#39;paint&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Fix Leaky Faucet"), "Fix Leaky Faucet");
    }

    #[test]
    fn empty_catalog_renders_placeholder() {
        let page = render_orders_page(&[]);
        assert!(page.contains("No job orders found."));
    }

    #[test]
    fn pending_card_shows_expected_completion() {
        let order = JobOrder::pending("Fix Leaky Faucet", "Technician A", Some(date(2025, 9, 30)));
        let page = render_orders_page(&[order]);
        assert!(page.contains("Fix Leaky Faucet"));
        assert!(page.contains("Assigned to: Technician A"));
        assert!(page.contains("text-yellow-600"));
        assert!(page.contains("Expected Completion: 2025-09-30"));
    }

    #[test]
    fn completed_card_shows_completion_date() {
        let order = JobOrder::completed("AC Unit Maintenance", "Technician B", date(2025, 9, 20));
        let page = render_orders_page(&[order]);
        assert!(page.contains("text-green-600"));
        assert!(page.contains("Completed on: 2025-09-20"));
        assert!(!page.contains("Expected Completion"));
    }

    #[test]
    fn overdue_card_shows_missed_due_date() {
        let order = JobOrder::overdue("Elevator Inspection", "Technician C", date(2025, 9, 15));
        let page = render_orders_page(&[order]);
        assert!(page.contains("text-red-600"));
        assert!(page.contains("Was due on: 2025-09-15"));
    }

    #[test]
    fn card_titles_are_escaped() {
        let order = JobOrder::pending("<script>alert(1)</script>", "A & B", None);
        let page = render_orders_page(&[order]);
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("A &amp; B"));
    }
}
