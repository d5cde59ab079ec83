use alloc::string::ToString;

use crate::{error::TokenError, node::{Operator, Symbol}, registry::VariableRegistry, resolve::Resolver};

#[test]
fn test_registry() {
    let registry = VariableRegistry::new();
    assert_eq!(registry.len(), 26 + 26 + 25 + 25);

    for c in ['a', 'z', 'A', 'Z', 'α', 'ω', 'Α', 'Ω'] {
        assert!(registry.contains(c), "{} should be a variable name", c);
    }

    // One past the end of each Greek run
    assert!(!registry.contains('ϊ'));
    assert!(!registry.contains('Ϊ'));
    assert!(!registry.contains('1'));

    assert_eq!(registry.lookup("q"), Some('q'));
    assert_eq!(registry.lookup("ab"), None);
    assert_eq!(registry.lookup(""), None);
}

#[test]
fn test_resolve_variables() {
    let registry = VariableRegistry::new();
    let resolver = Resolver::new(&registry, '/');

    assert_eq!(resolver.resolve("x"), Ok(Symbol::Variable('x')));
    assert_eq!(resolver.resolve("Q"), Ok(Symbol::Variable('Q')));
    assert_eq!(resolver.resolve("β"), Ok(Symbol::Variable('β')));
    assert_eq!(resolver.resolve("Δ"), Ok(Symbol::Variable('Δ')));
}

#[test]
fn test_resolve_commands() {
    let registry = VariableRegistry::new();
    let resolver = Resolver::new(&registry, '/');

    assert_eq!(resolver.resolve("/add"), Ok(Symbol::Compound(Operator::Addition)));
    assert_eq!(resolver.resolve("/bogus"), Err(TokenError::UnknownCommand("bogus".to_string())));
    assert_eq!(resolver.resolve("/"), Err(TokenError::UnknownCommand("".to_string())));
    assert_eq!(resolver.resolve("/x"), Err(TokenError::UnknownCommand("x".to_string())));

    // Command names are only commands after the prefix
    assert_eq!(resolver.resolve("add"), Err(TokenError::Unrecognised("add".to_string())));
}

#[test]
fn test_resolve_rejections() {
    let registry = VariableRegistry::new();
    let resolver = Resolver::new(&registry, '/');

    assert_eq!(resolver.resolve("1"), Err(TokenError::Unrecognised("1".to_string())));
    assert_eq!(resolver.resolve("xy"), Err(TokenError::Unrecognised("xy".to_string())));
    assert_eq!(resolver.resolve(" x"), Err(TokenError::Unrecognised(" x".to_string())));
    assert_eq!(resolver.resolve(""), Err(TokenError::Empty));
}

#[test]
fn test_custom_prefix() {
    let registry = VariableRegistry::new();
    let resolver = Resolver::new(&registry, ':');

    assert_eq!(resolver.resolve(":add"), Ok(Symbol::Compound(Operator::Addition)));
    assert_eq!(resolver.resolve("/add"), Err(TokenError::Unrecognised("/add".to_string())));
}

#[test]
fn test_operator_table() {
    assert_eq!(Operator::from_command("add"), Some(Operator::Addition));
    assert_eq!(Operator::from_command("sub"), None);

    for op in Operator::ALL {
        assert_eq!(Operator::from_command(op.command_name()), Some(*op));
    }
    assert_eq!(Operator::Addition.arity(), 2);
}
