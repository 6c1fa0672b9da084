//! Form values submitted from the admin create/edit screens, and how they turn into records.
//!
//! Validation follows the same rules as the rest of the admin layer: names are trimmed
//! and must not be empty, and prices must be finite and non-negative.

use crate::{
    entities::{Book, Product, Record, Role, User},
    errors::{Error, Result},
};
use serde::Deserialize;

/// A record that can be created from, or updated with, a submitted form.
///
/// `image` is the pending preview, if the user picked a new file. On update a
/// `None` image keeps the record's current image reference.
pub trait FormRecord: Record {
    /// Values the form collects
    type Form;

    /// Builds a brand new record with identifier `id`.
    ///
    /// # Errors
    /// Returns a validation error if the form values are unusable.
    fn create(id: i64, form: Self::Form, image: Option<String>) -> Result<Self>;

    /// Builds the updated version of `self`.
    ///
    /// # Errors
    /// Returns a validation error if the form values are unusable.
    fn update(&self, form: Self::Form, image: Option<String>) -> Result<Self>;
}

/// Fields of the "Add Book" / "Edit Book" form
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BookForm {
    /// Book title
    pub title: String,
    /// Author name
    pub author: String,
    /// Base price
    pub price: f64,
    /// Units in stock
    pub stock: u32,
}

/// Fields of the "Add User" / "Edit User" form
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserForm {
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Access role
    pub role: Role,
}

fn required(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidField {
            field,
            message: "cannot be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn validate_price(price: f64) -> Result<f64> {
    if price < 0.0 || !price.is_finite() {
        return Err(Error::InvalidAmount { amount: price });
    }
    Ok(price)
}

fn validate_email(email: &str) -> Result<String> {
    let email = required("email", email)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(Error::InvalidField {
            field: "email",
            message: format!("'{email}' is not an email address"),
        }),
    }
}

impl FormRecord for Book {
    type Form = BookForm;

    fn create(id: i64, form: BookForm, image: Option<String>) -> Result<Self> {
        Ok(Self {
            product: Product {
                id,
                title: required("title", &form.title)?,
                src_url: image,
                price: validate_price(form.price)?,
                discount: None,
                rating: None,
            },
            author: required("author", &form.author)?,
            stock: form.stock,
        })
    }

    fn update(&self, form: BookForm, image: Option<String>) -> Result<Self> {
        Ok(Self {
            product: Product {
                title: required("title", &form.title)?,
                src_url: image.or_else(|| self.product.src_url.clone()),
                price: validate_price(form.price)?,
                ..self.product.clone()
            },
            author: required("author", &form.author)?,
            stock: form.stock,
        })
    }
}

impl FormRecord for User {
    type Form = UserForm;

    fn create(id: i64, form: UserForm, image: Option<String>) -> Result<Self> {
        Ok(Self {
            id,
            name: required("name", &form.name)?,
            email: validate_email(&form.email)?,
            role: form.role,
            avatar: image,
        })
    }

    fn update(&self, form: UserForm, image: Option<String>) -> Result<Self> {
        Ok(Self {
            id: self.id,
            name: required("name", &form.name)?,
            email: validate_email(&form.email)?,
            role: form.role,
            avatar: image.or_else(|| self.avatar.clone()),
        })
    }
}
