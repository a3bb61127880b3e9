use anyhow::{Context, Result, anyhow};
use schemars::Schema;
use serde_json::{Map, Value};

type Object = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Boolean,
    Number,
}

/// One prompt-able parameter of a tagged enum branch.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Lists the `params` fields of the branch tagged `kind_key`.
///
/// Fields whose JSON type the wizard cannot prompt for are left out; their
/// serde defaults apply.
pub fn fields_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root = root.as_object().context("root schema is not an object")?;
    let branch = find_branch(root, kind_key)?;

    let Some(params) = branch
        .get("params")
        .and_then(Value::as_object)
        .and_then(|p| resolve(root, p))
    else {
        return Ok(vec![]);
    };
    let Some(props) = params.get("properties").and_then(Value::as_object) else {
        return Ok(vec![]);
    };

    let mut out = Vec::with_capacity(props.len());
    for (name, field) in props {
        let field = field
            .as_object()
            .and_then(|f| resolve(root, f))
            .ok_or_else(|| anyhow!("unreadable schema for field '{name}'"))?;
        if let Some(spec) = field_spec(name, field) {
            out.push(spec);
        }
    }
    Ok(out)
}

fn find_branch<'a>(root: &'a Object, kind_key: &str) -> Result<&'a Object> {
    root.get("oneOf")
        .or_else(|| root.get("anyOf"))
        .and_then(Value::as_array)
        .context("schema has no oneOf/anyOf")?
        .iter()
        .filter_map(|b| b.get("properties").and_then(Value::as_object))
        .find(|props| tag_of(props) == Some(kind_key))
        .ok_or_else(|| anyhow!("no branch found for type={kind_key}"))
}

fn tag_of(props: &Object) -> Option<&str> {
    let tag = props.get("type")?;
    if let Some(c) = tag.get("const").and_then(Value::as_str) {
        return Some(c);
    }
    match tag.get("enum").and_then(Value::as_array)?.as_slice() {
        [only] => only.as_str(),
        _ => None,
    }
}

/// Follows a local `$ref` such as `#/$defs/GaussianParams`.
fn resolve<'a>(root: &'a Object, obj: &'a Object) -> Option<&'a Object> {
    let Some(reference) = obj.get("$ref").and_then(Value::as_str) else {
        return Some(obj);
    };
    reference
        .strip_prefix("#/")?
        .split('/')
        .try_fold(root, |cur, seg| {
            let seg = seg.replace("~1", "/").replace("~0", "~");
            cur.get(&seg)?.as_object()
        })
}

fn field_spec(name: &str, field: &Object) -> Option<FieldSpec> {
    let kind = field_kind(field.get("type")?)?;
    let text = |key: &str| field.get(key).and_then(Value::as_str).map(str::to_string);
    let bound = |inclusive: &str, exclusive: &str| {
        field
            .get(inclusive)
            .or_else(|| field.get(exclusive))
            .and_then(Value::as_f64)
    };

    Some(FieldSpec {
        name: name.to_string(),
        title: text("title").unwrap_or_else(|| name.to_string()),
        description: text("description"),
        kind,
        default: field.get("default").cloned(),
        min: bound("minimum", "exclusiveMinimum"),
        max: bound("maximum", "exclusiveMaximum"),
    })
}

fn field_kind(ty: &Value) -> Option<FieldKind> {
    let named = |s: &str| match s {
        "boolean" => Some(FieldKind::Boolean),
        "number" | "integer" => Some(FieldKind::Number),
        _ => None,
    };
    match ty {
        Value::String(s) => named(s),
        // Option<T> shows up as ["T", "null"]
        Value::Array(types) => types.iter().filter_map(Value::as_str).find_map(named),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{DemoChoice, UIChoice};
    use serde_json::json;

    #[test]
    fn reads_fields_of_each_demo() {
        let schema = DemoChoice::schema();

        let fields = fields_for_kind(&schema, "spam-presence").unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "balanced_priors");
        assert_eq!(fields[0].kind, FieldKind::Boolean);
        assert_eq!(fields[0].default, Some(json!(true)));

        let fields = fields_for_kind(&schema, "fruit-measurements").unwrap();
        assert_eq!(fields[0].name, "std_floor");
        assert_eq!(fields[0].title, "Standard deviation floor");
        assert_eq!(fields[0].kind, FieldKind::Number);
        assert_eq!(fields[0].min, Some(0.0));

        let fields = fields_for_kind(&schema, "spam-word-counts").unwrap();
        assert_eq!(fields[0].name, "alpha");
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let schema = DemoChoice::schema();
        assert!(fields_for_kind(&schema, "poisson").is_err());
    }

    #[test]
    fn nullable_types_use_the_non_null_member() {
        assert_eq!(field_kind(&json!(["number", "null"])), Some(FieldKind::Number));
        assert_eq!(field_kind(&json!("string")), None);
    }
}
