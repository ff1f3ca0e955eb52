//! Inline CSS declaration parsing.
//!
//! Only declaration lists are accepted (the contents of an HTML `style`
//! attribute). Values are kept as their raw source text; no property-specific
//! validation happens here.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
};

use super::error::StyleParseError;
use super::map::StyleMap;

struct InlineDeclarations;

impl<'i> DeclarationParser<'i> for InlineDeclarations {
    type Declaration = (String, String);
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, ()>> {
        let start = input.position();
        while input.next().is_ok() {}
        let value = input.slice_from(start).trim();
        if value.is_empty() {
            return Err(input.new_custom_error(()));
        }
        Ok((name.as_ref().to_string(), value.to_string()))
    }
}

impl<'i> AtRuleParser<'i> for InlineDeclarations {
    type Prelude = ();
    type AtRule = (String, String);
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for InlineDeclarations {
    type Prelude = ();
    type QualifiedRule = (String, String);
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, (String, String), ()> for InlineDeclarations {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        false
    }
}

pub(crate) fn parse_declarations(source: &str) -> Result<StyleMap, StyleParseError> {
    let mut input = ParserInput::new(source);
    let mut parser = Parser::new(&mut input);
    let mut declarations = InlineDeclarations;

    let mut map = StyleMap::new();
    let mut rejected = Vec::new();
    for item in RuleBodyParser::new(&mut parser, &mut declarations) {
        match item {
            Ok((name, value)) => map.set(name, value),
            Err((_, slice)) => rejected.push(slice.trim().to_string()),
        }
    }

    if rejected.is_empty() {
        Ok(map)
    } else {
        Err(StyleParseError::InvalidDeclarations { rejected })
    }
}
