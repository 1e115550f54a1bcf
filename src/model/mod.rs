/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Login request and response models
pub mod auth;
/// Authenticated request façade
pub mod http;
/// Request envelopes and query parameters
pub mod requests;
/// Response envelopes and list shapes
pub mod responses;
