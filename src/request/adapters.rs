//! `HeaderTarget` for the HTTP request types the crate sends.

use std::borrow::Cow;

use axum::http::{HeaderMap, HeaderName, HeaderValue, Request};

use crate::error::{HeaderError, HeaderResult};
use crate::request::{HeaderTarget, RequestContext};

fn header_name(name: &str) -> HeaderResult<HeaderName> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|_| HeaderError::InvalidName(name.to_string()))
}

fn header_value(name: &str, value: Option<String>) -> HeaderResult<HeaderValue> {
    let value = value.ok_or_else(|| HeaderError::MissingValue(name.to_string()))?;
    HeaderValue::from_str(&value).map_err(|_| HeaderError::InvalidValue {
        name: name.to_string(),
    })
}

fn append(headers: &mut HeaderMap, name: &str, value: Option<String>) -> HeaderResult<()> {
    let value = header_value(name, value)?;
    headers.append(header_name(name)?, value);
    Ok(())
}

fn insert(headers: &mut HeaderMap, name: &str, value: Option<String>) -> HeaderResult<()> {
    let value = header_value(name, value)?;
    headers.insert(header_name(name)?, value);
    Ok(())
}

fn remove(headers: &mut HeaderMap, name: &str) -> HeaderResult<()> {
    headers.remove(header_name(name)?);
    Ok(())
}

impl HeaderTarget for reqwest::Request {
    type Error = HeaderError;

    fn context(&self) -> RequestContext<'_> {
        RequestContext::new(self.method(), Cow::Borrowed(self.url().as_str()), self.headers())
    }

    fn add_header(&mut self, name: &str, value: Option<String>) -> HeaderResult<()> {
        append(self.headers_mut(), name, value)
    }

    fn set_header(&mut self, name: &str, value: Option<String>) -> HeaderResult<()> {
        insert(self.headers_mut(), name, value)
    }

    fn remove_header(&mut self, name: &str) -> HeaderResult<()> {
        remove(self.headers_mut(), name)
    }
}

impl<B> HeaderTarget for Request<B> {
    type Error = HeaderError;

    fn context(&self) -> RequestContext<'_> {
        RequestContext::new(self.method(), Cow::Owned(self.uri().to_string()), self.headers())
    }

    fn add_header(&mut self, name: &str, value: Option<String>) -> HeaderResult<()> {
        append(self.headers_mut(), name, value)
    }

    fn set_header(&mut self, name: &str, value: Option<String>) -> HeaderResult<()> {
        insert(self.headers_mut(), name, value)
    }

    fn remove_header(&mut self, name: &str) -> HeaderResult<()> {
        remove(self.headers_mut(), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;

    fn values(request: &Request<()>, name: &str) -> Vec<String> {
        request
            .headers()
            .get_all(name)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_http_request_primitives() {
        let mut request = Request::builder()
            .uri("http://example.com/items")
            .body(())
            .unwrap();

        request.add_header("X-A", Some("1".into())).unwrap();
        request.add_header("x-a", Some("2".into())).unwrap();
        assert_eq!(values(&request, "x-a"), vec!["1", "2"]);

        request.set_header("X-A", Some("3".into())).unwrap();
        assert_eq!(values(&request, "x-a"), vec!["3"]);

        request.add_header("X-A", Some("4".into())).unwrap();
        request.remove_header("X-A").unwrap();
        assert!(values(&request, "x-a").is_empty());

        let ctx = request.context();
        assert_eq!(ctx.url(), "http://example.com/items");
    }

    #[test]
    fn test_reqwest_request_primitives() {
        let url = reqwest::Url::parse("http://example.com/users?page=2").unwrap();
        let mut request = reqwest::Request::new(Method::PUT, url);

        request.set_header("Content-Type", Some("application/json".into())).unwrap();
        request.add_header("Accept", Some("text/plain".into())).unwrap();
        request.add_header("Accept", Some("application/json".into())).unwrap();

        assert_eq!(request.headers().get_all("accept").iter().count(), 2);
        assert_eq!(request.headers()["content-type"], "application/json");

        let ctx = request.context();
        assert_eq!(ctx.method(), &Method::PUT);
        assert_eq!(ctx.url(), "http://example.com/users?page=2");
        assert_eq!(ctx.headers().len(), 3);
    }

    #[test]
    fn test_primitive_errors() {
        let mut request = Request::builder().body(()).unwrap();

        assert_eq!(
            request.set_header("X-A", None),
            Err(HeaderError::MissingValue("X-A".into()))
        );
        assert_eq!(
            request.add_header("bad name", Some("v".into())),
            Err(HeaderError::InvalidName("bad name".into()))
        );
        assert_eq!(
            request.add_header("X-A", Some("line\nbreak".into())),
            Err(HeaderError::InvalidValue { name: "X-A".into() })
        );
        assert!(request.headers().is_empty());
    }
}
