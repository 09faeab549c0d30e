pub mod company;
pub mod invoice;

pub use company::{Company, CompanyDetail, CompanyListItem};
pub use invoice::{Invoice, InvoiceDetail, InvoiceListItem};
