//! A CRUD screen: collection store + free-text filter + form state machine

use crate::core::error::{ConsoleResult, FormError, StoreError};
use crate::core::filter::filter_records;
use crate::core::form::{FormModel, bind};
use crate::core::record::RecordId;
use crate::core::store::CollectionStore;
use crate::entities::invoice::{Attachment, Invoice};
use serde_json::Value;
use std::fmt;

/// Visibility state of a screen's create/edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Hidden,
    Create,
    Edit(RecordId),
}

/// One CRUD page over a single entity type.
///
/// Composes the collection store, the free-text filter and the form state
/// machine. The four console screens (invoices, suppliers, payments, users)
/// are instances of this type.
pub struct Screen<T: FormModel> {
    store: CollectionStore<T>,
    form: FormState,
    query: String,
}

impl<T: FormModel> Screen<T> {
    pub fn new(store: CollectionStore<T>) -> Self {
        Self {
            store,
            form: FormState::Hidden,
            query: String::new(),
        }
    }

    /// The underlying collection store
    pub fn store(&self) -> &CollectionStore<T> {
        &self.store
    }

    pub fn form_state(&self) -> FormState {
        self.form
    }

    /// Open the form in create mode
    pub fn open_create(&mut self) {
        self.form = FormState::Create;
    }

    /// Open the form in edit mode for an existing record
    pub fn open_edit(&mut self, id: RecordId) -> ConsoleResult<()> {
        if self.store.get(id)?.is_none() {
            return Err(StoreError::NotFound {
                entity_type: T::resource_name_singular(),
                id,
            }
            .into());
        }
        self.form = FormState::Edit(id);
        Ok(())
    }

    /// Close the form without submitting
    pub fn cancel(&mut self) {
        self.form = FormState::Hidden;
    }

    /// Set the free-text filter query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The records currently visible: the collection filtered by the query,
    /// in insertion order
    pub fn rows(&self) -> ConsoleResult<Vec<T>> {
        let records = self.store.list()?;
        Ok(filter_records(&records, &self.query))
    }

    /// Submit the open form.
    ///
    /// Binds and validates the submission, then adds (create mode) or
    /// replaces (edit mode) the record. On success the form closes; a
    /// validation failure leaves it open and the store untouched.
    pub fn submit(&mut self, submission: &Value) -> ConsoleResult<T> {
        let result = match self.form {
            FormState::Hidden => {
                return Err(FormError::NoActiveForm {
                    entity_type: T::resource_name_singular(),
                }
                .into());
            }
            FormState::Create => {
                let candidate = bind::<T>(submission, None)?;
                self.store.add(candidate)?
            }
            FormState::Edit(id) => {
                let existing = self.store.get(id)?.ok_or(StoreError::NotFound {
                    entity_type: T::resource_name_singular(),
                    id,
                })?;
                let candidate = bind::<T>(submission, Some(&existing))?;
                self.store.update(id, candidate)?
            }
        };
        self.form = FormState::Hidden;
        Ok(result)
    }

    /// Delete a record; silently tolerant of absent identifiers
    pub fn delete(&mut self, id: RecordId) -> ConsoleResult<()> {
        self.store.remove(id)
    }
}

impl<T: FormModel> fmt::Debug for Screen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen")
            .field("entity", &T::resource_name_singular())
            .field("form", &self.form)
            .field("query", &self.query)
            .finish()
    }
}

impl Screen<Invoice> {
    /// Attach a document to an existing invoice, replacing any current one
    pub fn attach_document(&mut self, id: RecordId, attachment: Attachment) -> ConsoleResult<Invoice> {
        let mut invoice = self.store.get(id)?.ok_or(StoreError::NotFound {
            entity_type: "invoice",
            id,
        })?;
        invoice.attach(attachment);
        self.store.update(id, invoice)
    }
}
