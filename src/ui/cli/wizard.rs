use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{DemoChoice, FieldKind, OutputFormat, RunConfig, UIChoice, fields_for_kind};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

struct KindItem<K> {
    kind: K,
    text: String,
}

impl<K> Display for KindItem<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn kind_items<K>() -> Vec<KindItem<K>>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let text = match k.get_detailed_message() {
                Some(desc) if !desc.is_empty() => format!("{label}  {DIM_ITALIC}{desc}{RESET}"),
                _ => label.to_string(),
            };
            KindItem { kind: k, text }
        })
        .collect()
}

pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let mut select = inquire::Select::new(C::prompt_label(), kind_items::<C::Kind>());
    if let Some(help) = C::prompt_help() {
        select = select.with_help_message(help);
    }
    let kind = select.prompt()?.kind;
    prompt_params::<C, D>(driver, kind)
}

/// Asks for every parameter of `kind`, offering schema or serde defaults.
pub fn prompt_params<C: UIChoice, D: PromptDriver>(driver: &D, kind: C::Kind) -> Result<C> {
    let key: &'static str = kind.into();
    let fields = fields_for_kind(&C::schema(), key)?;
    if fields.is_empty() {
        return C::with_defaults(kind);
    }
    let defaults = C::default_params(kind);

    let mut params = Map::new();
    for field in fields {
        let init = field
            .default
            .clone()
            .or_else(|| defaults.get(&field.name).cloned());
        let help = field.description.as_deref().unwrap_or("");

        let value = match field.kind {
            FieldKind::Boolean => {
                let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
                Value::Bool(driver.ask_bool(&field.title, help, def)?)
            }
            FieldKind::Number => {
                let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
                Value::from(driver.ask_f64(&field.title, help, def, field.min, field.max)?)
            }
        };
        params.insert(field.name, value);
    }

    C::from_parts(kind, Value::Object(params))
}

/// Splits `"2, 1 3"` into `[2.0, 1.0, 3.0]`; blank input means no override.
pub fn parse_query(text: &str) -> Result<Option<Vec<f64>>> {
    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<f64>()
                .with_context(|| format!("invalid feature value '{t}'"))
        })
        .collect::<Result<Vec<f64>>>()?;
    Ok((!values.is_empty()).then_some(values))
}

pub fn run_wizard<D: PromptDriver>(driver: &D) -> Result<RunConfig> {
    let demo = prompt_choice::<DemoChoice, D>(driver)?;
    finish_config(driver, demo)
}

fn finish_config<D: PromptDriver>(driver: &D, demo: DemoChoice) -> Result<RunConfig> {
    let answer = driver.ask_string(
        "Query",
        "Feature values separated by commas (leave blank for the sample query)",
        "",
    )?;
    let query = parse_query(&answer)?;

    let json = driver.ask_bool(
        "Print JSON?",
        "Emit the evaluation outcome as JSON instead of the narrated trace",
        false,
    )?;
    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    Ok(RunConfig {
        demo,
        query,
        format,
    })
}
