//! Sales report route handlers.
//!
//! `/ventas` is the public report; `/historial` is the same report
//! behind the auth gate. Both filter persisted orders by day or month
//! and report the summed totals.

use axum::{Form, Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::models::order::Order;
use crate::services::SalesService;
use crate::services::sales::{SalesFilter, SalesReport};
use crate::state::AppState;

/// Report filter form data.
#[derive(Debug, Deserialize)]
pub struct ReportForm {
    pub filtro_fecha: Option<String>,
    pub fecha: Option<String>,
}

/// One order in the report.
#[derive(Debug, Serialize)]
pub struct OrderView {
    pub id: i32,
    pub nombre: String,
    pub direccion: String,
    pub telefono: String,
    pub fecha_pedido: String,
    pub total: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.as_i32(),
            nombre: order.customer_name.clone(),
            direccion: order.customer_address.clone(),
            telefono: order.customer_phone.clone(),
            fecha_pedido: order.placed_at.to_rfc3339(),
            total: order.total.display(),
        }
    }
}

/// The report view: matching orders and the summed total.
#[derive(Debug, Serialize)]
pub struct SalesReportView {
    pub orders: Vec<OrderView>,
    pub total: String,
}

impl From<SalesReport> for SalesReportView {
    fn from(report: SalesReport) -> Self {
        Self {
            orders: report.orders.iter().map(OrderView::from).collect(),
            total: report.total.display(),
        }
    }
}

async fn build_report(state: &AppState, form: &ReportForm) -> Result<Json<SalesReportView>> {
    let filter = SalesFilter::from_form(form.filtro_fecha.as_deref(), form.fecha.as_deref());
    let report = SalesService::new(state.pool()).report(filter).await?;

    Ok(Json(report.into()))
}

/// Display the empty report view.
///
/// GET /ventas
pub async fn sales_page() -> Json<SalesReportView> {
    Json(SalesReport::empty().into())
}

/// Compute the filtered report.
///
/// POST /ventas
pub async fn sales_report(
    State(state): State<AppState>,
    Form(form): Form<ReportForm>,
) -> Result<Json<SalesReportView>> {
    build_report(&state, &form).await
}

/// Display the empty report view, auth required.
///
/// GET /historial
pub async fn history_page(RequireAuth(_user): RequireAuth) -> Json<SalesReportView> {
    Json(SalesReport::empty().into())
}

/// Compute the filtered report, auth required.
///
/// POST /historial
pub async fn history_report(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Form(form): Form<ReportForm>,
) -> Result<Json<SalesReportView>> {
    build_report(&state, &form).await
}
