//! Order-entry route handlers.
//!
//! The clerk builds up a pending order one pizza at a time, then
//! finalizes it with the customer's details. Drafts live in the
//! session-backed [`DraftStore`].

use axum::{
    Form, Json,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use pronto_core::{Customer, DraftItem, DraftOrder, PizzaSize, Topping};

use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::services::{DraftStore, OrderService};
use crate::services::orders::OrderError;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Errors produced while interpreting the add-pizza form.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PizzaFormError {
    /// No size was chosen, or the name is not on the menu.
    #[error("select a pizza size")]
    BadSize,
    /// A topping name is not on the menu.
    #[error("unknown topping")]
    BadTopping,
    /// More toppings than the menu offers.
    #[error("too many toppings")]
    TooManyToppings,
    /// Quantity missing, non-numeric, or below 1.
    #[error("quantity must be at least 1")]
    BadQuantity,
}

/// The add-pizza form, collected from raw key/value pairs because the
/// topping checkboxes repeat the `ingredientes` key.
#[derive(Debug, PartialEq, Eq)]
pub struct AddPizzaForm {
    pub size: PizzaSize,
    pub toppings: Vec<Topping>,
    pub quantity: u32,
}

impl AddPizzaForm {
    /// Maximum number of topping selections (the menu size).
    const MAX_TOPPINGS: usize = 5;

    /// Interpret the submitted pairs, in submission order.
    ///
    /// # Errors
    ///
    /// Returns a [`PizzaFormError`] for the first invalid field.
    pub fn from_pairs(pairs: &[(String, String)]) -> std::result::Result<Self, PizzaFormError> {
        let mut size = None;
        let mut toppings = Vec::new();
        let mut quantity = None;

        for (key, value) in pairs {
            match key.as_str() {
                "tamano" => {
                    size = Some(value.parse::<PizzaSize>().map_err(|_| PizzaFormError::BadSize)?);
                }
                "ingredientes" => {
                    toppings
                        .push(value.parse::<Topping>().map_err(|_| PizzaFormError::BadTopping)?);
                }
                "cantidad" => {
                    quantity =
                        Some(value.parse::<u32>().map_err(|_| PizzaFormError::BadQuantity)?);
                }
                // Customer fields ride along in the same form; they are
                // validated at finalization, not here.
                _ => {}
            }
        }

        if toppings.len() > Self::MAX_TOPPINGS {
            return Err(PizzaFormError::TooManyToppings);
        }

        let size = size.ok_or(PizzaFormError::BadSize)?;
        let quantity = quantity.filter(|&q| q >= 1).ok_or(PizzaFormError::BadQuantity)?;

        Ok(Self {
            size,
            toppings,
            quantity,
        })
    }
}

/// Remove form data. The index is parsed leniently: anything that isn't
/// a valid position is a silent no-op, like an out-of-range position.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub idx: Option<String>,
}

/// Finalize form data. `fecha_pedido` is accepted for compatibility
/// with the order form but intentionally ignored; the order timestamp
/// always comes from the database clock.
#[derive(Debug, Deserialize)]
pub struct FinalizeForm {
    pub nombre: String,
    pub direccion: String,
    pub telefono: String,
    #[allow(dead_code)]
    pub fecha_pedido: Option<String>,
}

/// Query parameters for outcome display.
#[derive(Debug, Deserialize)]
pub struct OutcomeQuery {
    pub msg: Option<String>,
    pub error: Option<String>,
    pub total: Option<String>,
}

// =============================================================================
// View Models
// =============================================================================

/// One menu size with its base price.
#[derive(Debug, Serialize)]
pub struct SizeOptionView {
    pub value: &'static str,
    pub base_price: String,
}

/// One menu topping with its flat price.
#[derive(Debug, Serialize)]
pub struct ToppingOptionView {
    pub value: &'static str,
    pub price: String,
}

/// One pending draft for display.
#[derive(Debug, Serialize)]
pub struct DraftItemView {
    pub position: usize,
    pub size: String,
    pub toppings: String,
    pub quantity: u32,
    pub subtotal: String,
}

/// The order-entry view: menu, current drafts, and running total.
#[derive(Debug, Serialize)]
pub struct OrderEntryView {
    pub clerk: String,
    pub sizes: Vec<SizeOptionView>,
    pub toppings: Vec<ToppingOptionView>,
    pub drafts: Vec<DraftItemView>,
    pub draft_total: String,
    pub msg: Option<String>,
    pub error: Option<String>,
    pub total: Option<String>,
}

fn menu_sizes() -> Vec<SizeOptionView> {
    PizzaSize::ALL
        .into_iter()
        .map(|size| SizeOptionView {
            value: size.as_str(),
            base_price: size.base_price().display(),
        })
        .collect()
}

fn menu_toppings() -> Vec<ToppingOptionView> {
    Topping::ALL
        .into_iter()
        .map(|topping| ToppingOptionView {
            value: topping.as_str(),
            price: Topping::price().display(),
        })
        .collect()
}

fn draft_views(draft: &DraftOrder) -> Vec<DraftItemView> {
    draft
        .items()
        .iter()
        .enumerate()
        .map(|(position, item)| DraftItemView {
            position,
            size: item.size.to_string(),
            toppings: Topping::join(&item.toppings),
            quantity: item.quantity,
            subtotal: item.subtotal.display(),
        })
        .collect()
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the order-entry view.
///
/// GET /index
pub async fn order_entry(
    RequireAuth(user): RequireAuth,
    session: Session,
    Query(query): Query<OutcomeQuery>,
) -> Result<Json<OrderEntryView>> {
    let draft = DraftStore::new(&session).load().await?;

    Ok(Json(OrderEntryView {
        clerk: user.username,
        sizes: menu_sizes(),
        toppings: menu_toppings(),
        drafts: draft_views(&draft),
        draft_total: draft.grand_total().display(),
        msg: query.msg,
        error: query.error,
        total: query.total,
    }))
}

/// Add one pizza configuration to the pending order.
///
/// POST /index
pub async fn add_pizza(
    RequireAuth(_user): RequireAuth,
    session: Session,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let form = match AddPizzaForm::from_pairs(&pairs) {
        Ok(form) => form,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected pizza form");
            return Ok(Redirect::to("/index?error=pizza").into_response());
        }
    };

    let item = DraftItem::new(form.size, form.toppings, form.quantity);
    DraftStore::new(&session).append(item).await?;

    Ok(Redirect::to("/index?msg=added").into_response())
}

/// Remove one pending pizza by its zero-based position.
///
/// POST /quitar
pub async fn remove_pizza(
    RequireAuth(_user): RequireAuth,
    session: Session,
    Form(form): Form<RemoveForm>,
) -> Result<Redirect> {
    if let Some(position) = form.idx.as_deref().and_then(|raw| raw.parse::<usize>().ok()) {
        DraftStore::new(&session).remove_at(position).await?;
    }

    Ok(Redirect::to("/index"))
}

/// Finalize the pending order with the customer's details.
///
/// POST /terminar
pub async fn finalize(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<FinalizeForm>,
) -> Result<Response> {
    let Ok(customer) = Customer::parse(&form.nombre, &form.direccion, &form.telefono) else {
        return Ok(Redirect::to("/index?error=customer").into_response());
    };

    let store = DraftStore::new(&session);
    let draft = store.load().await?;

    match OrderService::new(state.pool()).finalize(&customer, &draft).await {
        Ok(finalized) => {
            // Only a fully persisted order clears the pending store
            store.clear().await?;

            tracing::info!(
                order = %finalized.id,
                line_items = finalized.line_items,
                total = %finalized.total,
                "Order finalized"
            );

            Ok(Redirect::to(&format!(
                "/index?msg=done&total={}",
                finalized.total.amount()
            ))
            .into_response())
        }
        Err(OrderError::EmptyDraft) => {
            Ok(Redirect::to("/index?error=empty").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_form_collects_repeated_toppings_in_order() {
        let form = AddPizzaForm::from_pairs(&pairs(&[
            ("tamano", "Mediana"),
            ("ingredientes", "Jamón"),
            ("ingredientes", "Piña"),
            ("cantidad", "2"),
        ]))
        .expect("valid form");

        assert_eq!(form.size, PizzaSize::Mediana);
        assert_eq!(form.toppings, vec![Topping::Jamon, Topping::Pina]);
        assert_eq!(form.quantity, 2);
    }

    #[test]
    fn test_form_allows_zero_toppings() {
        let form = AddPizzaForm::from_pairs(&pairs(&[("tamano", "Chica"), ("cantidad", "1")]))
            .expect("valid form");
        assert!(form.toppings.is_empty());
    }

    #[test]
    fn test_form_ignores_customer_fields() {
        let form = AddPizzaForm::from_pairs(&pairs(&[
            ("nombre", "Ana García"),
            ("direccion", "Av. Juárez 10"),
            ("tamano", "Jumbo"),
            ("cantidad", "1"),
        ]))
        .expect("valid form");
        assert_eq!(form.size, PizzaSize::Jumbo);
    }

    #[test]
    fn test_form_rejects_unknown_size() {
        let result = AddPizzaForm::from_pairs(&pairs(&[("tamano", "Gigante"), ("cantidad", "1")]));
        assert_eq!(result, Err(PizzaFormError::BadSize));
    }

    #[test]
    fn test_form_rejects_missing_size() {
        let result = AddPizzaForm::from_pairs(&pairs(&[("cantidad", "1")]));
        assert_eq!(result, Err(PizzaFormError::BadSize));
    }

    #[test]
    fn test_form_rejects_unknown_topping() {
        let result = AddPizzaForm::from_pairs(&pairs(&[
            ("tamano", "Chica"),
            ("ingredientes", "Anchoas"),
            ("cantidad", "1"),
        ]));
        assert_eq!(result, Err(PizzaFormError::BadTopping));
    }

    #[test]
    fn test_form_rejects_six_toppings() {
        let result = AddPizzaForm::from_pairs(&pairs(&[
            ("tamano", "Chica"),
            ("ingredientes", "Jamón"),
            ("ingredientes", "Piña"),
            ("ingredientes", "Champiñones"),
            ("ingredientes", "Chorizo"),
            ("ingredientes", "Gomitas"),
            ("ingredientes", "Jamón"),
            ("cantidad", "1"),
        ]));
        assert_eq!(result, Err(PizzaFormError::TooManyToppings));
    }

    #[test]
    fn test_form_rejects_bad_quantity() {
        for bad in ["0", "-1", "dos", ""] {
            let result =
                AddPizzaForm::from_pairs(&pairs(&[("tamano", "Chica"), ("cantidad", bad)]));
            assert_eq!(result, Err(PizzaFormError::BadQuantity), "cantidad={bad}");
        }

        let result = AddPizzaForm::from_pairs(&pairs(&[("tamano", "Chica")]));
        assert_eq!(result, Err(PizzaFormError::BadQuantity));
    }
}
