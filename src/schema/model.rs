//! In-memory model of one protocol snapshot.
//!
//! The model is the closed form of [`super::raw`]: every type expression is
//! one [`Shape`] variant, so an unrecognized kind can only surface while the
//! raw document is converted, never later during emission.

// ============================================================================
// Imports
// ============================================================================

use crate::error::{Error, Result};

use super::raw::{RawCommand, RawDomain, RawEvent, RawProperty, RawProtocol, RawTypeDecl, RawTypeExpr};

// ============================================================================
// Primitive
// ============================================================================

/// Primitive kinds a type expression can name directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// `string`
    String,
    /// `integer`
    Integer,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `any`: opaque encoded value.
    Any,
    /// `object` without declared properties: string-to-string map.
    Object,
}

impl Primitive {
    /// Returns the schema spelling of the kind.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Any => "any",
            Self::Object => "object",
        }
    }
}

// ============================================================================
// Shape
// ============================================================================

/// Closed set of type expression kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A primitive kind.
    Primitive(Primitive),
    /// A closed set of string literals.
    Enum(Vec<String>),
    /// Sequence of the element shape.
    Array(Box<Shape>),
    /// Reference to a declared type, `Name` or `Domain.Name`.
    Reference(String),
    /// Ordered named members.
    Composite(Vec<Property>),
}

impl Shape {
    /// Returns `true` if declarations of this shape are passed by value.
    ///
    /// Everything except a composite record is value-shaped.
    #[inline]
    #[must_use]
    pub fn is_value_kind(&self) -> bool {
        !matches!(self, Self::Composite(_))
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// A named member of a record: property, parameter, return value or event
/// field.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Wire name, used verbatim as the serialized field tag.
    pub name: String,
    pub description: Option<String>,
    /// May be omitted on the wire.
    pub optional: bool,
    pub experimental: bool,
    pub shape: Shape,
}

/// A named type declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub name: String,
    pub description: Option<String>,
    pub experimental: bool,
    pub shape: Shape,
}

/// A request/response operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub name: String,
    pub description: Option<String>,
    pub experimental: bool,
    pub parameters: Vec<Property>,
    pub returns: Vec<Property>,
}

/// A one-way notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    pub description: Option<String>,
    pub experimental: bool,
    pub parameters: Vec<Property>,
}

/// An independent namespace of types, commands and events.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    pub name: String,
    pub description: Option<String>,
    pub experimental: bool,
    pub types: Vec<TypeDecl>,
    pub commands: Vec<Command>,
    pub events: Vec<Event>,
}

impl Domain {
    /// Looks up a type declaration by its bare name.
    #[must_use]
    pub fn type_decl(&self, name: &str) -> Option<&TypeDecl> {
        self.types.iter().find(|t| t.name == name)
    }
}

// ============================================================================
// Version
// ============================================================================

/// Protocol version tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: String,
    pub minor: String,
}

impl Version {
    /// Creates a version tag.
    #[inline]
    #[must_use]
    pub fn new(major: impl Into<String>, minor: impl Into<String>) -> Self {
        Self {
            major: major.into(),
            minor: minor.into(),
        }
    }

    /// Returns the dotted tag, e.g. `1.2`.
    #[must_use]
    pub fn tag(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    /// Returns the output directory name, e.g. `v1_2`.
    ///
    /// The dot is replaced so the directory doubles as a module name.
    #[must_use]
    pub fn dir_name(&self) -> String {
        format!("v{}_{}", self.major, self.minor)
    }
}

// ============================================================================
// Schema
// ============================================================================

/// One full protocol snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub version: Version,
    pub domains: Vec<Domain>,
}

impl Schema {
    /// Finds a domain by exact name.
    #[must_use]
    pub fn domain(&self, name: &str) -> Option<&Domain> {
        self.domains.iter().find(|d| d.name == name)
    }
}

// ============================================================================
// Conversion
// ============================================================================

impl TryFrom<RawProtocol> for Schema {
    type Error = Error;

    fn try_from(raw: RawProtocol) -> Result<Self> {
        let domains = raw
            .domains
            .into_iter()
            .map(Domain::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            version: Version::new(raw.version.major, raw.version.minor),
            domains,
        })
    }
}

impl TryFrom<RawDomain> for Domain {
    type Error = Error;

    fn try_from(raw: RawDomain) -> Result<Self> {
        let domain = raw.domain;

        let types = raw
            .types
            .into_iter()
            .map(|t| convert_type_decl(&domain, t))
            .collect::<Result<Vec<_>>>()?;
        let commands = raw
            .commands
            .into_iter()
            .map(|c| convert_command(&domain, c))
            .collect::<Result<Vec<_>>>()?;
        let events = raw
            .events
            .into_iter()
            .map(|e| convert_event(&domain, e))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: domain,
            description: raw.description,
            experimental: raw.experimental,
            types,
            commands,
            events,
        })
    }
}

fn convert_type_decl(domain: &str, raw: RawTypeDecl) -> Result<TypeDecl> {
    let context = format!("{domain}.{}", raw.id);
    let description = raw.ty.description.clone();
    let shape = match convert_shape(&context, raw.ty)? {
        // A declared object without members is still a record.
        Shape::Primitive(Primitive::Object) => Shape::Composite(Vec::new()),
        shape => shape,
    };

    Ok(TypeDecl {
        name: raw.id,
        description,
        experimental: raw.experimental,
        shape,
    })
}

fn convert_command(domain: &str, raw: RawCommand) -> Result<Command> {
    let context = format!("{domain}.{}", raw.name);
    Ok(Command {
        parameters: convert_properties(&context, raw.parameters)?,
        returns: convert_properties(&context, raw.returns)?,
        name: raw.name,
        description: raw.description,
        experimental: raw.experimental,
    })
}

fn convert_event(domain: &str, raw: RawEvent) -> Result<Event> {
    let context = format!("{domain}.{}", raw.name);
    Ok(Event {
        parameters: convert_properties(&context, raw.parameters)?,
        name: raw.name,
        description: raw.description,
        experimental: raw.experimental,
    })
}

fn convert_properties(context: &str, raw: Vec<RawProperty>) -> Result<Vec<Property>> {
    raw.into_iter()
        .map(|p| {
            let context = format!("{context}.{}", p.name);
            let description = p.ty.description.clone();
            Ok(Property {
                shape: convert_shape(&context, p.ty)?,
                name: p.name,
                description,
                optional: p.optional,
                experimental: p.experimental,
            })
        })
        .collect()
}

/// Converts one raw type expression into its closed [`Shape`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedShape`] when the kind is missing or unknown,
/// or an `array` has no element type.
fn convert_shape(context: &str, raw: RawTypeExpr) -> Result<Shape> {
    if let Some(reference) = raw.reference {
        return Ok(Shape::Reference(reference));
    }

    let Some(kind) = raw.kind else {
        return Err(Error::unsupported_shape(context, "<missing type and $ref>"));
    };

    let shape = match kind.as_str() {
        "string" => match raw.enum_values {
            Some(values) => Shape::Enum(values),
            None => Shape::Primitive(Primitive::String),
        },
        "integer" => Shape::Primitive(Primitive::Integer),
        "number" => Shape::Primitive(Primitive::Number),
        "boolean" => Shape::Primitive(Primitive::Boolean),
        "any" => Shape::Primitive(Primitive::Any),
        "object" => match raw.properties {
            Some(properties) => Shape::Composite(convert_properties(context, properties)?),
            None => Shape::Primitive(Primitive::Object),
        },
        "array" => {
            let items = raw
                .items
                .ok_or_else(|| Error::unsupported_shape(context, "array without items"))?;
            Shape::Array(Box::new(convert_shape(context, *items)?))
        }
        other => return Err(Error::unsupported_shape(context, other)),
    };

    Ok(shape)
}

// ============================================================================
// Tests
// ============================================================================
