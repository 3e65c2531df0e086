use todo_core::api::{ApiRequest, Method, Router};

use crate::app::AppContext;
use crate::cli::RequestArgs;
use crate::errors::CliError;

pub fn handle_request(ctx: &AppContext, args: &RequestArgs) -> anyhow::Result<()> {
    let method: Method = args.method.parse()?;
    let mut request = ApiRequest::new(method, args.path.clone());
    if let Some(ref raw) = args.body {
        let body: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| CliError::invalid_input(format!("Invalid JSON body: {}", e)))?;
        request = request.with_body(body);
    }

    let mut handle = if method == Method::Get {
        ctx.open_store()?
    } else {
        ctx.open_store_for_write()?
    };
    let response = Router::default().handle(handle.store_mut(), &request);
    handle.close()?;

    if !ctx.quiet() {
        println!("{}", response.status);
    }
    if let Some(ref body) = response.body {
        println!("{}", serde_json::to_string_pretty(body)?);
    }
    if !response.is_success() {
        return Err(anyhow::anyhow!("Request failed with status {}", response.status));
    }
    Ok(())
}
