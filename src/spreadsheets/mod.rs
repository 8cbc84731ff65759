pub mod leads_xlsx;

pub use leads_xlsx::leads_workbook;
