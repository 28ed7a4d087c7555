/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Authenticated HTTP request pipeline
pub mod http;
/// Request models: search filters and update options
pub mod requests;
/// Response models: resources and paginated lists
pub mod responses;
/// Path construction and query flattening helpers
pub mod utils;
