//! Order repository: transactional order creation and the sales report
//! queries.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use pronto_core::{Customer, DraftItem, Money, OrderId, Topping};

use super::RepositoryError;
use crate::models::order::Order;

/// Row shape for the `pedidos` table.
#[derive(Debug, FromRow)]
struct OrderRow {
    id: i32,
    nombre: String,
    direccion: String,
    telefono: String,
    fecha_pedido: DateTime<Utc>,
    total: Decimal,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: OrderId::new(row.id),
            customer_name: row.nombre,
            customer_address: row.direccion,
            customer_phone: row.telefono,
            placed_at: row.fecha_pedido,
            total: Money::new(row.total),
        }
    }
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create an order and its line items in a single transaction.
    ///
    /// The `pedidos` row is inserted first (its `fecha_pedido` defaults
    /// to the database clock), then one `detalle_pizzas` row per draft.
    /// Any failure rolls the whole transaction back, so a partial order
    /// can never be observed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails.
    pub async fn create_with_line_items(
        &self,
        customer: &Customer,
        drafts: &[DraftItem],
        total: Money,
    ) -> Result<OrderId, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let order_id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO pedidos (nombre, direccion, telefono, total)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(customer.name.as_str())
        .bind(&customer.address)
        .bind(&customer.phone)
        .bind(total.amount())
        .fetch_one(&mut *tx)
        .await?;

        for draft in drafts {
            let cantidad = i32::try_from(draft.quantity).map_err(|_| {
                RepositoryError::DataCorruption("quantity exceeds integer range".to_owned())
            })?;

            sqlx::query(
                r"
                INSERT INTO detalle_pizzas (pedido_id, tamano, ingredientes, cantidad, subtotal)
                VALUES ($1, $2, $3, $4, $5)
                ",
            )
            .bind(order_id)
            .bind(draft.size.as_str())
            .bind(Topping::join(&draft.toppings))
            .bind(cantidad)
            .bind(draft.subtotal.amount())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(OrderId::new(order_id))
    }

    /// Orders placed on the exact calendar day.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn placed_on_day(&self, date: NaiveDate) -> Result<Vec<Order>, RepositoryError> {
        use chrono::Datelike;

        let rows: Vec<OrderRow> = sqlx::query_as(
            r"
            SELECT id, nombre, direccion, telefono, fecha_pedido, total
            FROM pedidos
            WHERE date_part('year', fecha_pedido)::int = $1
              AND date_part('month', fecha_pedido)::int = $2
              AND date_part('day', fecha_pedido)::int = $3
            ORDER BY fecha_pedido
            ",
        )
        .bind(date.year())
        .bind(i32::try_from(date.month()).unwrap_or_default())
        .bind(i32::try_from(date.day()).unwrap_or_default())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    /// Orders placed anywhere in the given month, regardless of day.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn placed_in_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<Order>, RepositoryError> {
        let rows: Vec<OrderRow> = sqlx::query_as(
            r"
            SELECT id, nombre, direccion, telefono, fecha_pedido, total
            FROM pedidos
            WHERE date_part('year', fecha_pedido)::int = $1
              AND date_part('month', fecha_pedido)::int = $2
            ORDER BY fecha_pedido
            ",
        )
        .bind(year)
        .bind(i32::try_from(month).unwrap_or_default())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }
}
