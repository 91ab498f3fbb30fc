//! Rendering of calculation results as text, JSON or CSV.

use std::fmt::{self, Write as _};

use ro_tax_core::calculations::Advisory;
use ro_tax_core::constants::BASE_CURRENCY;
use ro_tax_core::{RegimeVariant, TaxChart, TaxConfiguration, TaxResult};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::{format_amount, format_percentage};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A finished calculation together with its advisories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegimeReport {
    pub result: TaxResult,
    pub advisories: Vec<Advisory>,
}

/// Notice printed while exchange rates are missing.
pub fn pending_notice(config: &TaxConfiguration) -> String {
    format!(
        "Waiting for exchange rates ({} income, {} expenses); pass --rates with a table \
         covering them.\n",
        config.income_currency, config.deductible_expenses_currency
    )
}

/// Detailed text breakdown of one regime.
pub fn render_text(
    config: &TaxConfiguration,
    report: &RegimeReport,
) -> Result<String, fmt::Error> {
    let result = &report.result;
    let mut out = String::new();

    writeln!(out, "{}", result.regime.label())?;
    amount_line(&mut out, "Gross income", result.gross_income_in_base_currency, BASE_CURRENCY)?;
    let over_vat = if result.gross_income_over_vat_threshold {
        "yes"
    } else {
        "no"
    };
    writeln!(out, "  {:<24}{over_vat:>18}", "Over VAT threshold")?;
    if !result.regime.is_individual() {
        amount_line(
            &mut out,
            "Company taxes",
            result.company_taxes_in_base_currency,
            BASE_CURRENCY,
        )?;
        amount_line(
            &mut out,
            "Owner salary",
            result.owner_salary_in_base_currency,
            BASE_CURRENCY,
        )?;
    }
    let levies = [
        (
            "Pension (CAS)",
            result.pension_tax_amount_in_base_currency,
            result.pension_tax_percentage,
        ),
        (
            "Health (CASS)",
            result.health_tax_amount_in_base_currency,
            result.health_tax_percentage,
        ),
        (
            "Income tax",
            result.income_tax_amount_in_base_currency,
            result.income_tax_percentage,
        ),
        (
            "Total tax",
            result.total_tax_amount_in_base_currency,
            result.total_tax_percentage,
        ),
    ];
    for (label, amount, percentage) in levies {
        writeln!(
            out,
            "  {label:<24}{:>18} {BASE_CURRENCY} {:>8}",
            format_amount(amount),
            format_percentage(percentage)
        )?;
    }
    amount_line(
        &mut out,
        "Net income (yearly)",
        result.total_net_income_in_base_currency,
        BASE_CURRENCY,
    )?;
    amount_line(
        &mut out,
        &format!("Net income ({})", config.income_interval),
        result.net_income,
        &config.income_currency,
    )?;

    for advisory in &report.advisories {
        writeln!(out, "  ! {advisory}")?;
    }
    Ok(out)
}

/// Side-by-side text comparison of several regimes.
pub fn render_comparison(
    config: &TaxConfiguration,
    reports: &[RegimeReport],
) -> Result<String, fmt::Error> {
    let mut out = String::new();

    write!(out, "{:<24}", "")?;
    for report in reports {
        write!(out, "{:>20}", report.result.regime.label())?;
    }
    writeln!(out)?;

    let net_label = format!("Net income ({})", config.income_interval);
    let rows: [(&str, fn(&TaxResult) -> String); 8] = [
        ("Gross income", |r| format_amount(r.gross_income_in_base_currency)),
        ("Pension (CAS)", |r| format_amount(r.pension_tax_amount_in_base_currency)),
        ("Health (CASS)", |r| format_amount(r.health_tax_amount_in_base_currency)),
        ("Income tax", |r| format_amount(r.income_tax_amount_in_base_currency)),
        ("Total tax", |r| format_amount(r.total_tax_amount_in_base_currency)),
        ("Total tax %", |r| format_percentage(r.total_tax_percentage)),
        ("Net income (yearly)", |r| format_amount(r.total_net_income_in_base_currency)),
        (net_label.as_str(), |r| format_amount(r.net_income)),
    ];
    for (label, value) in rows {
        write!(out, "{label:<24}")?;
        for report in reports {
            write!(out, "{:>20}", value(&report.result))?;
        }
        writeln!(out)?;
    }

    if let Some(best) = best_regime(reports) {
        writeln!(out, "\nHighest net income: {}", best.label())?;
    }
    for report in reports {
        for advisory in &report.advisories {
            writeln!(out, "! {}: {advisory}", report.result.regime)?;
        }
    }
    Ok(out)
}

/// Regime leaving the owner with the most net income. Ties go to the first.
pub fn best_regime(reports: &[RegimeReport]) -> Option<RegimeVariant> {
    reports
        .iter()
        .fold(None::<&RegimeReport>, |best, report| match best {
            Some(best)
                if best.result.total_net_income_in_base_currency
                    >= report.result.total_net_income_in_base_currency =>
            {
                Some(best)
            }
            _ => Some(report),
        })
        .map(|report| report.result.regime)
}

/// Serializes any report as pretty JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Writes the chart series as CSV, one row per sample.
pub fn render_chart_csv(chart: &TaxChart) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for point in &chart.data {
        writer.serialize(point)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("cannot flush CSV: {e}"))?;
    Ok(String::from_utf8(bytes)?)
}

fn amount_line(
    out: &mut String,
    label: &str,
    amount: Decimal,
    currency: &str,
) -> fmt::Result {
    writeln!(out, "  {label:<24}{:>18} {currency}", format_amount(amount))
}
