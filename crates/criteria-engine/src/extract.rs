use crate::outcome::{FieldOutcome, SkipReason};
use crate::schema::{Criteria, FieldDef};
use chrono::NaiveTime;
use model::core::value::Value;
use model::filter::comparison::Comparison;
use model::filter::condition::Condition;
use model::filter::spec::FieldSpec;
use model::filter::Filter;
use tracing::{debug, error};

/// Walk the criteria schema in declaration order and report one outcome per
/// registered field.
pub fn extract_outcomes<C: Criteria>(criteria: &C) -> Vec<FieldOutcome> {
    C::schema()
        .fields()
        .iter()
        .map(|def| field_outcome(def, criteria))
        .collect()
}

/// Conditions for every present field, in declaration order. Skipped fields
/// contribute nothing; accessor failures are logged and dropped, never
/// surfaced as an error.
pub fn extract_conditions<C: Criteria>(criteria: &C) -> Vec<Condition> {
    extract_outcomes(criteria)
        .into_iter()
        .filter_map(|outcome| match outcome {
            FieldOutcome::Condition(condition) => Some(condition),
            FieldOutcome::Skipped {
                field,
                reason: SkipReason::AccessFailed(e),
            } => {
                error!(field, %e, "could not build condition");
                None
            }
            FieldOutcome::Skipped { .. } => None,
        })
        .collect()
}

/// Absent criteria propagate as an absent filter, not as an empty one.
pub fn build_filter<C: Criteria>(criteria: Option<&C>) -> Option<Filter> {
    criteria.map(|c| Filter::with_conditions(extract_conditions(c)))
}

fn field_outcome<C>(def: &FieldDef<C>, criteria: &C) -> FieldOutcome {
    let value = match def.read(criteria) {
        Ok(Some(value)) => value,
        Ok(None) => return skip(def, SkipReason::Absent),
        Err(e) => return skip(def, SkipReason::AccessFailed(e)),
    };
    if value.is_empty_string() {
        return skip(def, SkipReason::EmptyString);
    }

    let spec = def.spec();
    let name = spec
        .map(|fs| fs.resolve_name(def.name()))
        .unwrap_or(def.name());

    let condition = match value {
        // String fields re-resolve their operator from the field spec: an
        // explicit override wins, anything else falls back to LIKE, not EQ.
        Value::String(s) => {
            let operator = spec.and_then(|fs| fs.operator).unwrap_or(Comparison::Like);
            let pattern = spec.and_then(|fs| fs.pattern).unwrap_or_default();
            Condition::new(operator, name, Value::String(pattern.apply(&s)))
        }
        // The widening flag is only consulted here, on the date-only branch.
        Value::Date(d) => {
            let widen = spec.is_some_and(|fs| fs.widen_date);
            let value = if widen {
                Value::Timestamp(d.and_time(NaiveTime::MIN).and_utc())
            } else {
                Value::Date(d)
            };
            Condition::new(default_operator(spec), name, value)
        }
        value @ (Value::Timestamp(_) | Value::Boolean(_)) => {
            Condition::new(default_operator(spec), name, value)
        }
        other => Condition::new(
            default_operator(spec),
            name,
            Value::String(other.to_string()),
        ),
    };

    debug!(
        field = def.name(),
        kind = %condition.value.kind(),
        "condition emitted"
    );
    FieldOutcome::Condition(condition)
}

fn default_operator(spec: Option<&FieldSpec>) -> Comparison {
    spec.and_then(|fs| fs.operator).unwrap_or(Comparison::Eq)
}

fn skip<C>(def: &FieldDef<C>, reason: SkipReason) -> FieldOutcome {
    debug!(field = def.name(), ?reason, "field skipped");
    FieldOutcome::Skipped {
        field: def.name(),
        reason,
    }
}
