mod common;
mod expenses;
mod renovation;
