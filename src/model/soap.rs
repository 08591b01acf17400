/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! SOAP envelope codec
//!
//! Requests are small enough to be rendered with string formatting. Responses
//! are read with `quick-xml` into a minimal element tree ([`XmlNode`]) keyed by
//! local name, so `SOAP-ENV:Body`, `soap:Body` and `Body` are all the same node.

use crate::constants::SOAP_NAMESPACE;
use crate::error::AppError;
use crate::model::normalize::{Item, normalize};
use quick_xml::Reader;
use quick_xml::escape::{escape, resolve_predefined_entity, unescape};
use quick_xml::events::Event;
use serde_json::{Map, Value};

/// Element of a parsed XML document
///
/// Attributes are not kept: nothing in the service responses depends on them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    /// Local name, without namespace prefix
    pub name: String,
    /// Concatenated, trimmed text content
    pub text: String,
    /// Child elements in document order
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    fn named(name: &[u8]) -> Self {
        Self {
            name: String::from_utf8_lossy(name).into_owned(),
            ..Self::default()
        }
    }

    /// Parses `xml` and returns its root element
    pub fn parse(xml: &str) -> Result<XmlNode, AppError> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => stack.push(XmlNode::named(e.local_name().as_ref())),
                Event::Empty(e) => {
                    let node = XmlNode::named(e.local_name().as_ref());
                    attach(&mut stack, &mut root, node);
                }
                Event::End(_) => {
                    let mut node = stack
                        .pop()
                        .ok_or_else(|| AppError::Xml("unbalanced closing tag".to_string()))?;
                    node.text = node.text.trim().to_string();
                    attach(&mut stack, &mut root, node);
                }
                Event::Text(e) => {
                    if let Some(current) = stack.last_mut() {
                        let raw = String::from_utf8_lossy(&e);
                        current.text.push_str(&unescape(&raw)?);
                    }
                }
                Event::CData(e) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(&e));
                    }
                }
                Event::GeneralRef(e) => {
                    if let Some(current) = stack.last_mut() {
                        if let Some(ch) = e.resolve_char_ref()? {
                            current.text.push(ch);
                        } else {
                            let name = String::from_utf8_lossy(&e);
                            let resolved = resolve_predefined_entity(&name).ok_or_else(|| {
                                AppError::Xml(format!("unknown entity &{name};"))
                            })?;
                            current.text.push_str(resolved);
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(AppError::Xml("unexpected end of document".to_string()));
        }
        root.ok_or_else(|| AppError::Xml("empty document".to_string()))
    }

    /// First child named `name`
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All children named `name`
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// First child element, whatever its name
    pub fn first_child(&self) -> Option<&XmlNode> {
        self.children.first()
    }
}

fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            if root.is_none() {
                *root = Some(node);
            }
        }
    }
}

/// Renders `name`/`value` pairs as child elements, escaping the values
pub fn render_params(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(name, value)| format!("<{name}>{}</{name}>", escape(value.as_str())))
        .collect()
}

/// Wraps `params` (already rendered XML) in a SOAP envelope for `method`
pub fn build_envelope(method: &str, params: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <soap:Envelope xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
         xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\" \
         xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">\
         <soap:Body>\
         <{method} xmlns=\"{SOAP_NAMESPACE}\">{params}</{method}>\
         </soap:Body>\
         </soap:Envelope>"
    )
}

/// Decoded body of a SOAP response
#[derive(Debug, Clone, PartialEq)]
pub enum SoapReply {
    /// The call was rejected; carries the `faultstring`
    Fault(String),
    /// Normalized `return` map of the method response
    Result(Map<String, Value>),
}

impl SoapReply {
    /// Parses a SOAP response document
    ///
    /// The first element of the body decides the shape: a `Fault` yields its
    /// fault string, anything else is treated as `<methodResponse>` whose
    /// `return` element holds the key/value list.
    pub fn parse(xml: &str) -> Result<SoapReply, AppError> {
        let envelope = XmlNode::parse(xml)?;
        let body = envelope
            .child("Body")
            .ok_or_else(|| AppError::Xml("missing SOAP body".to_string()))?;
        let payload = body
            .first_child()
            .ok_or_else(|| AppError::Xml("empty SOAP body".to_string()))?;

        if payload.name == "Fault" {
            let fault = payload
                .child("faultstring")
                .map(|fault| fault.text.clone())
                .unwrap_or_default();
            return Ok(SoapReply::Fault(fault));
        }

        let items = payload
            .child("return")
            .map(Item::list_of)
            .unwrap_or_default();
        Ok(SoapReply::Result(normalize(&items)))
    }
}
