//! Per-object read surface handed to read handlers.

use core::{any::Any, fmt};

use hashbrown::HashMap;

use super::{
  error::CodecError,
  field_value::{DecodedField, DecodedValue},
};

#[cfg(test)]
mod tests;

/// Indexable view over one decoded object's field block.
///
/// All field records, including recursively decoded reference values, are
/// materialized before the read handler runs, so the handler may address
/// fields positionally, by name, or in any order it likes. An implicit
/// cursor advances past each field as it is read, making plain sequential
/// reads selector-free.
pub struct FieldReader {
  fields:        Vec<DecodedField>,
  by_name:       HashMap<String, usize>,
  cursor:        usize,
  pending_index: Option<usize>,
  pending_name:  Option<String>,
}

impl fmt::Debug for FieldReader {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FieldReader").finish_non_exhaustive()
  }
}

impl FieldReader {
  pub(crate) fn new(fields: Vec<DecodedField>) -> Self {
    let mut by_name = HashMap::new();
    for (position, field) in fields.iter().enumerate() {
      if let Some(name) = &field.name {
        by_name.entry(name.clone()).or_insert(position);
      }
    }
    Self { fields, by_name, cursor: 0, pending_index: None, pending_name: None }
  }

  /// Selects the position the next read is taken from.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::FieldSelector`] if a position was already
  /// selected before a read was issued.
  pub fn at(&mut self, index: usize) -> Result<&mut Self, CodecError> {
    if self.pending_index.is_some() {
      return Err(CodecError::FieldSelector);
    }
    self.pending_index = Some(index);
    Ok(self)
  }

  /// Selects the current cursor position, useful as a positional fallback
  /// for an optional [`named`](Self::named) selector.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::FieldSelector`] if a position was already
  /// selected before a read was issued.
  pub fn at_current(&mut self) -> Result<&mut Self, CodecError> {
    let cursor = self.cursor;
    self.at(cursor)
  }

  /// Selects the field carrying `name` for the next read.
  ///
  /// If the name is absent from the stream and a positional selector was set
  /// first, the position is used instead, which lets handlers treat names as
  /// optional refinements.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::FieldSelector`] if a name was already selected
  /// before a read was issued.
  pub fn named(&mut self, name: &str) -> Result<&mut Self, CodecError> {
    if self.pending_name.is_some() {
      return Err(CodecError::FieldSelector);
    }
    self.pending_name = Some(name.to_string());
    Ok(self)
  }

  /// Returns `true` when the object carries a field with the given name.
  #[must_use]
  pub fn has_named(&self, name: &str) -> bool {
    self.by_name.contains_key(name)
  }

  /// Returns the number of fields in the object's field block.
  #[must_use]
  pub fn field_count(&self) -> usize {
    self.fields.len()
  }

  /// Reads a boolean field.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::FieldTypeMismatch`] if the field is not a bool,
  /// or a selector resolution error.
  pub fn read_bool(&mut self) -> Result<bool, CodecError> {
    let position = self.take_position()?;
    match &self.fields[position].value {
      DecodedValue::Bool(value) => {
        let value = *value;
        self.cursor = position + 1;
        Ok(value)
      },
      other => Err(CodecError::FieldTypeMismatch { expected: "bool", found: other.kind() }),
    }
  }

  /// Reads a 32-bit integer field.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::FieldTypeMismatch`] if the field is not an i32,
  /// or a selector resolution error.
  pub fn read_i32(&mut self) -> Result<i32, CodecError> {
    let position = self.take_position()?;
    match &self.fields[position].value {
      DecodedValue::I32(value) => {
        let value = *value;
        self.cursor = position + 1;
        Ok(value)
      },
      other => Err(CodecError::FieldTypeMismatch { expected: "i32", found: other.kind() }),
    }
  }

  /// Reads a 64-bit integer field.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::FieldTypeMismatch`] if the field is not an i64,
  /// or a selector resolution error.
  pub fn read_i64(&mut self) -> Result<i64, CodecError> {
    let position = self.take_position()?;
    match &self.fields[position].value {
      DecodedValue::I64(value) => {
        let value = *value;
        self.cursor = position + 1;
        Ok(value)
      },
      other => Err(CodecError::FieldTypeMismatch { expected: "i64", found: other.kind() }),
    }
  }

  /// Reads a 32-bit float field.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::FieldTypeMismatch`] if the field is not an f32,
  /// or a selector resolution error.
  pub fn read_f32(&mut self) -> Result<f32, CodecError> {
    let position = self.take_position()?;
    match &self.fields[position].value {
      DecodedValue::F32(value) => {
        let value = *value;
        self.cursor = position + 1;
        Ok(value)
      },
      other => Err(CodecError::FieldTypeMismatch { expected: "f32", found: other.kind() }),
    }
  }

  /// Reads a 64-bit float field.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::FieldTypeMismatch`] if the field is not an f64,
  /// or a selector resolution error.
  pub fn read_f64(&mut self) -> Result<f64, CodecError> {
    let position = self.take_position()?;
    match &self.fields[position].value {
      DecodedValue::F64(value) => {
        let value = *value;
        self.cursor = position + 1;
        Ok(value)
      },
      other => Err(CodecError::FieldTypeMismatch { expected: "f64", found: other.kind() }),
    }
  }

  /// Reads a string field.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::FieldTypeMismatch`] if the field is not a string,
  /// or a selector resolution error.
  pub fn read_string(&mut self) -> Result<String, CodecError> {
    let position = self.take_position()?;
    match &self.fields[position].value {
      DecodedValue::Str(value) => {
        let value = value.clone();
        self.cursor = position + 1;
        Ok(value)
      },
      other => Err(CodecError::FieldTypeMismatch { expected: "string", found: other.kind() }),
    }
  }

  /// Reads a nested object field, moving the materialized value out.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::FieldTypeMismatch`] if the field is not an object
  /// reference, [`CodecError::FieldConsumed`] if it was already read, or
  /// [`CodecError::ValueTypeMismatch`] if the stored value is not a `T`.
  pub fn read_object<T: Any>(&mut self) -> Result<T, CodecError> {
    let position = self.take_position()?;
    match &mut self.fields[position].value {
      DecodedValue::Object(slot) => {
        let boxed = slot.take().ok_or(CodecError::FieldConsumed)?;
        let value =
          boxed.downcast::<T>().map(|b| *b).map_err(|_| CodecError::ValueTypeMismatch(core::any::type_name::<T>()))?;
        self.cursor = position + 1;
        Ok(value)
      },
      other => Err(CodecError::FieldTypeMismatch { expected: "object", found: other.kind() }),
    }
  }

  /// Reads a sequence field, moving the materialized elements out.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::FieldTypeMismatch`] if the field is not a
  /// sequence reference, [`CodecError::FieldConsumed`] if it was already
  /// read, or [`CodecError::ValueTypeMismatch`] if any element is not a `T`.
  pub fn read_sequence<T: Any>(&mut self) -> Result<Vec<T>, CodecError> {
    let position = self.take_position()?;
    match &mut self.fields[position].value {
      DecodedValue::Sequence(slot) => {
        let boxed = slot.take().ok_or(CodecError::FieldConsumed)?;
        let mut items = Vec::with_capacity(boxed.len());
        for item in boxed {
          let value =
            item.downcast::<T>().map(|b| *b).map_err(|_| CodecError::ValueTypeMismatch(core::any::type_name::<T>()))?;
          items.push(value);
        }
        self.cursor = position + 1;
        Ok(items)
      },
      other => Err(CodecError::FieldTypeMismatch { expected: "sequence", found: other.kind() }),
    }
  }

  /// Resolves and clears the pending selector, falling back to the cursor.
  fn take_position(&mut self) -> Result<usize, CodecError> {
    let pending_index = self.pending_index.take();
    let pending_name = self.pending_name.take();
    let position = if let Some(name) = pending_name {
      match self.by_name.get(&name) {
        Some(&position) => position,
        None => pending_index.ok_or(CodecError::FieldNotFound(name))?,
      }
    } else if let Some(index) = pending_index {
      index
    } else {
      self.cursor
    };
    if position >= self.fields.len() {
      return Err(CodecError::FieldIndexOutOfRange { index: position, len: self.fields.len() });
    }
    Ok(position)
  }
}
