use crate::domain::{FilterCriteria, PricedListing};
use crate::errors::{ResultResp, ServerError};
use crate::responses::xlsx_response;
use rust_xlsxwriter::{Format, Workbook};

const HEADERS: [&str; 10] = [
    "Location Name",
    "Address",
    "Cuisine Compatibility",
    "Price Range",
    "Vacancy Status",
    "Average Store Size (sq ft)",
    "Average Lease Rate ($/sq ft)",
    "Monthly Lease Cost",
    "Yearly Lease Cost",
    "Image URL",
];

fn xlsx_err(what: &str) -> impl Fn(rust_xlsxwriter::XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

/// Build the workbook for a filtered result set.
pub fn listings_workbook(
    listings: &[PricedListing],
    criteria: &FilterCriteria,
) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();
    let money = Format::new().set_num_format("$#,##0");

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(xlsx_err("header"))?;
    }

    for (i, priced) in listings.iter().enumerate() {
        let r = (i + 1) as u32;
        let listing = &priced.listing;

        worksheet
            .write_string(r, 0, &listing.name)
            .map_err(xlsx_err("location name"))?;
        worksheet
            .write_string(r, 1, &listing.address)
            .map_err(xlsx_err("address"))?;
        worksheet
            .write_string(r, 2, listing.cuisine_compatibility.as_deref().unwrap_or(""))
            .map_err(xlsx_err("cuisine compatibility"))?;
        worksheet
            .write_string(r, 3, &listing.price_range)
            .map_err(xlsx_err("price range"))?;
        worksheet
            .write_string(r, 4, &listing.vacancy_status)
            .map_err(xlsx_err("vacancy status"))?;
        worksheet
            .write_number(r, 5, listing.avg_store_size_sq_ft)
            .map_err(xlsx_err("store size"))?;
        worksheet
            .write_number(r, 6, listing.avg_lease_rate_per_sq_ft)
            .map_err(xlsx_err("lease rate"))?;
        worksheet
            .write_number_with_format(r, 7, priced.lease.monthly, &money)
            .map_err(xlsx_err("monthly lease cost"))?;
        worksheet
            .write_number_with_format(r, 8, priced.lease.yearly, &money)
            .map_err(xlsx_err("yearly lease cost"))?;
        worksheet
            .write_string(r, 9, &listing.image_url)
            .map_err(xlsx_err("image url"))?;
    }

    // Record what the projection assumed, two rows under the table.
    let note_row = (listings.len() + 2) as u32;
    let note = format!(
        "Lease costs assume {} sq ft. Restaurant type: {}. Startup budget: {}.",
        criteria.square_footage.value(),
        criteria.restaurant_type,
        criteria.startup_costs,
    );
    worksheet
        .write_string(note_row, 0, &note)
        .map_err(xlsx_err("assumptions note"))?;

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

pub fn export_listings_xlsx(listings: &[PricedListing], criteria: &FilterCriteria) -> ResultResp {
    let buffer = listings_workbook(listings, criteria)?;
    xlsx_response(buffer, "footflow_locations.xlsx")
}
