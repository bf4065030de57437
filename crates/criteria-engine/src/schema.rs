use crate::error::AccessError;
use model::core::value::Value;
use model::filter::spec::FieldSpec;

/// Result of reading one criteria field: the value may be absent, and the
/// read itself may fail.
pub type AccessResult = Result<Option<Value>, AccessError>;

type Accessor<C> = Box<dyn Fn(&C) -> AccessResult + Send + Sync>;

/// One registered criteria field: declared name, value accessor and
/// optional per-field spec.
pub struct FieldDef<C> {
    name: &'static str,
    spec: Option<FieldSpec>,
    accessor: Accessor<C>,
}

impl<C> FieldDef<C> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn spec(&self) -> Option<&FieldSpec> {
        self.spec.as_ref()
    }

    pub fn read(&self, criteria: &C) -> AccessResult {
        (self.accessor)(criteria)
    }
}

/// Ordered field schema for a criteria type. Registration order is the
/// order conditions are emitted in.
pub struct CriteriaSchema<C> {
    fields: Vec<FieldDef<C>>,
}

impl<C> CriteriaSchema<C> {
    pub fn new() -> Self {
        CriteriaSchema { fields: Vec::new() }
    }

    /// Register a field with an infallible accessor.
    pub fn field<F>(self, name: &'static str, accessor: F) -> Self
    where
        F: Fn(&C) -> Option<Value> + Send + Sync + 'static,
    {
        self.push(name, None, move |c| Ok(accessor(c)))
    }

    /// Register a field with an infallible accessor and a per-field spec.
    pub fn field_with_spec<F>(self, name: &'static str, spec: FieldSpec, accessor: F) -> Self
    where
        F: Fn(&C) -> Option<Value> + Send + Sync + 'static,
    {
        self.push(name, Some(spec), move |c| Ok(accessor(c)))
    }

    /// Register a field whose accessor may fail.
    pub fn try_field<F>(self, name: &'static str, accessor: F) -> Self
    where
        F: Fn(&C) -> AccessResult + Send + Sync + 'static,
    {
        self.push(name, None, accessor)
    }

    /// Register a fallible field with a per-field spec.
    pub fn try_field_with_spec<F>(self, name: &'static str, spec: FieldSpec, accessor: F) -> Self
    where
        F: Fn(&C) -> AccessResult + Send + Sync + 'static,
    {
        self.push(name, Some(spec), accessor)
    }

    pub fn fields(&self) -> &[FieldDef<C>] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn push<F>(mut self, name: &'static str, spec: Option<FieldSpec>, accessor: F) -> Self
    where
        F: Fn(&C) -> AccessResult + Send + Sync + 'static,
    {
        self.fields.push(FieldDef {
            name,
            spec,
            accessor: Box::new(accessor),
        });
        self
    }
}

impl<C> Default for CriteriaSchema<C> {
    fn default() -> Self {
        CriteriaSchema::new()
    }
}

/// A criteria type that declares its filterable fields.
pub trait Criteria: Sized {
    fn schema() -> CriteriaSchema<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: Option<String>,
        age: Option<i64>,
    }

    fn sample_schema() -> CriteriaSchema<Sample> {
        CriteriaSchema::new()
            .field("name", |c: &Sample| c.name.clone().map(Value::from))
            .field("age", |c: &Sample| c.age.map(Value::from))
            .try_field("shard", |_| Err(AccessError::Unreadable("offline".into())))
    }

    #[test]
    fn test_registration_order() {
        let schema = sample_schema();
        assert_eq!(schema.len(), 3);
        let names: Vec<_> = schema.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name", "age", "shard"]);
    }

    #[test]
    fn test_accessor_read() {
        let schema = sample_schema();
        let sample = Sample {
            name: Some("ann".to_string()),
            age: None,
        };

        assert_eq!(
            schema.fields()[0].read(&sample),
            Ok(Some(Value::from("ann")))
        );
        assert_eq!(schema.fields()[1].read(&sample), Ok(None));
        assert_eq!(
            schema.fields()[2].read(&sample),
            Err(AccessError::Unreadable("offline".to_string()))
        );
    }

    #[test]
    fn test_schema_is_shareable() {
        fn assert_sync<T: Send + Sync>(_: &T) {}
        let schema = sample_schema();
        assert_sync(&schema);
    }
}
