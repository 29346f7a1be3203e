//! Customer details attached to a finalized order.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when validating customer details.
#[derive(thiserror::Error, Debug, Clone)]
pub enum CustomerError {
    /// The name is shorter than the minimum length.
    #[error("name must be at least {min} characters")]
    NameTooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// The name is longer than the maximum length.
    #[error("name must be at most {max} characters")]
    NameTooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The address is empty.
    #[error("address is required")]
    EmptyAddress,
    /// The phone number is empty.
    #[error("phone is required")]
    EmptyPhone,
}

/// A customer's name.
///
/// ## Constraints
///
/// - Length: 4-50 characters, counted after trimming
///
/// ## Examples
///
/// ```
/// use pronto_core::CustomerName;
///
/// assert!(CustomerName::parse("Ana García").is_ok());
/// assert!(CustomerName::parse("Ana").is_err()); // too short
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CustomerName(String);

impl CustomerName {
    /// Minimum length of a customer name.
    pub const MIN_LENGTH: usize = 4;
    /// Maximum length of a customer name.
    pub const MAX_LENGTH: usize = 50;

    /// Parse a `CustomerName` from a string.
    ///
    /// # Errors
    ///
    /// Returns a [`CustomerError`] if the trimmed name is outside 4-50
    /// characters.
    pub fn parse(input: &str) -> Result<Self, CustomerError> {
        let trimmed = input.trim();
        let len = trimmed.chars().count();

        if len < Self::MIN_LENGTH {
            return Err(CustomerError::NameTooShort {
                min: Self::MIN_LENGTH,
            });
        }
        if len > Self::MAX_LENGTH {
            return Err(CustomerError::NameTooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated customer details for order finalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Customer name, 4-50 characters.
    pub name: CustomerName,
    /// Delivery address, non-empty.
    pub address: String,
    /// Contact phone, non-empty.
    pub phone: String,
}

impl Customer {
    /// Validate raw form input into customer details.
    ///
    /// # Errors
    ///
    /// Returns a [`CustomerError`] for the first invalid field.
    pub fn parse(name: &str, address: &str, phone: &str) -> Result<Self, CustomerError> {
        let name = CustomerName::parse(name)?;

        let address = address.trim();
        if address.is_empty() {
            return Err(CustomerError::EmptyAddress);
        }

        let phone = phone.trim();
        if phone.is_empty() {
            return Err(CustomerError::EmptyPhone);
        }

        Ok(Self {
            name,
            address: address.to_owned(),
            phone: phone.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length_bounds() {
        assert!(CustomerName::parse("Ana").is_err());
        assert!(CustomerName::parse("Anas").is_ok());
        assert!(CustomerName::parse(&"x".repeat(50)).is_ok());
        assert!(matches!(
            CustomerName::parse(&"x".repeat(51)),
            Err(CustomerError::NameTooLong { max: 50 })
        ));
    }

    #[test]
    fn test_customer_requires_address_and_phone() {
        assert!(matches!(
            Customer::parse("Ana García", "  ", "555-0101"),
            Err(CustomerError::EmptyAddress)
        ));
        assert!(matches!(
            Customer::parse("Ana García", "Av. Juárez 10", ""),
            Err(CustomerError::EmptyPhone)
        ));

        let customer =
            Customer::parse(" Ana García ", " Av. Juárez 10 ", " 555-0101 ").expect("valid");
        assert_eq!(customer.name.as_str(), "Ana García");
        assert_eq!(customer.address, "Av. Juárez 10");
        assert_eq!(customer.phone, "555-0101");
    }
}
