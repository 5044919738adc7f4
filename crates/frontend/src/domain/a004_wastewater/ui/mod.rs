mod page;

pub use page::WastewaterPage;
