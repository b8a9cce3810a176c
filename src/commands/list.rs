//! Lists a backend resource one page at a time, or all of it with `--all`.

use crate::{
    api::{
        resources::{Barcode, CustomerVisit, Pricing, Product, Reservation, Resource},
        rest::RestTransport,
    },
    libs::{
        config::{ApiConfig, Config},
        list::{ListController, RefreshOutcome},
        messages::Message,
        overstay::SystemClock,
        params::Params,
        session::SessionContext,
        view::View,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use prettytable::Table;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// reservations, barcodes, products, pricing or customers
    resource: Resource,

    /// 1-based page number
    #[arg(short, long, default_value_t = 1)]
    page: u32,

    /// Rows per page; defaults to the configured page size
    #[arg(long)]
    page_size: Option<u32>,

    /// Free-text search
    #[arg(short, long)]
    search: Option<String>,

    /// Extra filter as key=value; an empty value clears the filter
    #[arg(short, long = "filter", value_parser = parse_filter)]
    filters: Vec<(String, String)>,

    /// Fetch every page instead of one
    #[arg(long)]
    all: bool,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::load()?;
    let api = config.api.clone().ok_or_else(|| msg_error_anyhow!(Message::ConfigApiMissing))?;
    let session = config.session();
    let page_size = args.page_size.unwrap_or(config.list.page_size);

    match args.resource {
        Resource::Reservations => show::<Reservation>(&args, &api, session, page_size, View::reservations).await,
        Resource::Barcodes => show::<Barcode>(&args, &api, session, page_size, |rows| View::barcodes(rows, &SystemClock)).await,
        Resource::Products => show::<Product>(&args, &api, session, page_size, View::products).await,
        Resource::Pricing => show::<Pricing>(&args, &api, session, page_size, View::pricing).await,
        Resource::Customers => show::<CustomerVisit>(&args, &api, session, page_size, View::customers).await,
    }
}

async fn show<T>(args: &ListArgs, api: &ApiConfig, session: SessionContext, page_size: u32, render: impl Fn(&[T]) -> Table) -> Result<()>
where
    T: DeserializeOwned + Clone,
{
    let mut params = session.default_params();
    params.merge(&filter_params(&args.filters));

    let transport = RestTransport::<T>::new(api, session, args.resource);
    let controller = ListController::<T, _>::with_page_size(transport, params, page_size);
    if let Some(search) = &args.search {
        controller.search(search);
    }
    controller.go_to_page(args.page);

    if args.all {
        let rows = controller.fetch_all().await?;
        render(&rows).printstd();
        msg_success!(Message::ListExported(rows.len(), args.resource.to_string()));
        return Ok(());
    }

    if controller.refresh(None).await == RefreshOutcome::Failed {
        msg_bail_anyhow!(Message::ListLoadFailed(args.resource.to_string()));
    }

    let state = controller.snapshot();
    if state.items.is_empty() {
        msg_info!(Message::ListEmpty(args.resource.to_string()));
    } else {
        render(&state.items).printstd();
    }
    msg_print!(Message::ListPageInfo {
        page: state.page,
        total_pages: state.total_pages(),
        total_count: state.total_count,
    });
    Ok(())
}

fn filter_params(filters: &[(String, String)]) -> Params {
    filters
        .iter()
        .map(|(key, value)| {
            let value = if value.is_empty() { Value::Null } else { Value::String(value.clone()) };
            (key.clone(), value)
        })
        .collect()
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim().to_string(), value.trim().to_string())),
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}
