use actix_web::dev::ServiceRequest;
use actix_web::http::header::HeaderName;
use std::str::FromStr;

pub fn get_header<T>(req: &ServiceRequest, header_name: &'static str) -> Result<Option<T>, String>
where
    T: FromStr,
{
    let header_value = match req.headers().get(HeaderName::from_static(header_name)) {
        Some(value) => value,
        None => return Ok(None),
    };

    header_value
        .to_str()
        .map_err(|_| format!("header {header_name} can't be converted to string"))?
        .parse::<T>()
        .map_err(|_| format!("header {header_name} has wrong type"))
        .map(Some)
}
