use crate::data::to_template_value;
use crate::error::GoatError;
use gtmpl::{Context, Template, Value};
use gtmpl_value::FuncError;

/// Compiles `source` as a Go text/template and executes it against `data`.
pub fn render(source: &str, data: &serde_json::Value) -> Result<String, GoatError> {
    let mut tmpl = Template::default();
    tmpl.add_func("slice", slice);
    tmpl.parse(source)
        .map_err(|e| GoatError::Parse(e.to_string()))?;
    tracing::debug!(bytes = source.len(), "template parsed");
    let ctx = Context::from(to_template_value(data));
    tmpl.render(&ctx)
        .map_err(|e| GoatError::Execute(e.to_string()))
}

/// `{{slice a b c}}` collects its arguments into a sequence.
fn slice(args: &[Value]) -> Result<Value, FuncError> {
    Ok(Value::Array(args.to_vec()))
}
