use std::sync::Arc;
use std::thread;

use ahash::HashSet;
use insta::assert_snapshot;
use strum::IntoEnumIterator;

use sieve_ast::ast::{
    ColumnRef, Expr, ExprRef, ExprVisitor, Literal, LiteralExpr, LogicalBinaryExpr,
    LogicalOperator, NodeLocation, NotExpr,
};
use sieve_ast::{Error, Position, Printer, Side};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_nodes_are_send_and_sync() {
    assert_send_sync::<Expr>();
    assert_send_sync::<LogicalBinaryExpr>();
    assert_send_sync::<ExprRef>();
}

#[test]
fn test_and_of_literals() {
    let expr = LogicalBinaryExpr::and(Expr::boolean(true), Expr::boolean(false));
    assert_eq!(expr.operator(), LogicalOperator::And);
    assert_eq!(
        **expr.left(),
        Expr::Literal(LiteralExpr::new(Literal::Boolean(true)))
    );
    assert_eq!(
        **expr.right(),
        Expr::Literal(LiteralExpr::new(Literal::Boolean(false)))
    );
}

#[test]
fn test_and_differs_from_or() {
    let operands = [
        (Expr::column("a"), Expr::column("b")),
        (Expr::boolean(true), Expr::not(Expr::column("x"))),
        (
            Expr::or(Expr::column("p"), Expr::column("q")),
            Expr::literal(Literal::Null),
        ),
    ];
    for (left, right) in operands {
        assert_ne!(
            Expr::and(left.clone(), right.clone()),
            Expr::or(left, right)
        );
    }
}

#[test]
fn test_every_operator_constructs() {
    for operator in LogicalOperator::iter() {
        let built = LogicalBinaryExpr::builder()
            .operator(operator)
            .left(Expr::column("a"))
            .right(Expr::column("b"))
            .build();
        assert_eq!(
            built,
            Ok(LogicalBinaryExpr::new(
                operator,
                Expr::column("a"),
                Expr::column("b")
            ))
        );
    }
}

#[test]
fn test_missing_parts_are_rejected() {
    let missing_operator = LogicalBinaryExpr::builder()
        .left(Expr::column("a"))
        .right(Expr::column("b"))
        .build();
    let missing_left = LogicalBinaryExpr::builder()
        .operator(LogicalOperator::And)
        .right(Expr::column("b"))
        .build();
    let missing_right = LogicalBinaryExpr::builder()
        .operator(LogicalOperator::And)
        .left(Expr::column("a"))
        .build();
    assert_eq!(missing_operator, Err(Error::MissingOperator));
    assert_eq!(missing_left, Err(Error::MissingLeft));
    assert_eq!(missing_right, Err(Error::MissingRight));
    assert_eq!(
        Error::MissingLeft.to_string(),
        "logical binary expression is missing its left operand"
    );
}

#[test]
fn test_equality_laws() {
    let location = NodeLocation::new(3, 4);
    let a = Expr::and(Expr::column("x"), Expr::column("y"));
    let b = Expr::from(
        LogicalBinaryExpr::and(
            Expr::from(ColumnRef::new("x").with_location(NodeLocation::new(3, 1))),
            Expr::column("y"),
        )
        .with_location(location),
    );
    let c = Expr::from(LogicalBinaryExpr::located(
        NodeLocation::new(8, 8),
        LogicalOperator::And,
        Expr::column("x"),
        Expr::column("y"),
    ));

    assert_eq!(a, a);
    assert_eq!(a == b, b == a);
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a, c);
    assert_eq!(b.location(), Some(location));
}

#[test]
fn test_trees_key_a_hash_set() {
    let build = || {
        Expr::or(
            Expr::and(Expr::column("t.a"), Expr::not(Expr::column("t.b"))),
            Expr::literal(Literal::String("x".to_string())),
        )
    };
    let mut seen: HashSet<Expr> = HashSet::default();
    assert!(seen.insert(build()));
    let located = Expr::from(
        LogicalBinaryExpr::or(
            Expr::and(
                Expr::column("t.a"),
                Expr::from(
                    NotExpr::new(Expr::column("t.b")).with_location(NodeLocation::new(1, 9)),
                ),
            ),
            Expr::literal(Literal::String("x".to_string())),
        )
        .with_location(NodeLocation::new(1, 1)),
    );
    assert!(!seen.insert(build()));
    assert!(!seen.insert(located));
    assert!(seen.insert(Expr::and(Expr::column("t.a"), Expr::column("t.b"))));
    assert_eq!(seen.len(), 2);
}

#[test]
fn test_printer_combines_like_manual_visit() {
    let a_and_b = LogicalBinaryExpr::and(Expr::column("a"), Expr::column("b"));
    let c = Expr::column("c");
    let whole = Expr::or(Expr::from(a_and_b.clone()), c.clone());

    let mut printer = Printer::default();
    let printed = printer.print(&whole);

    let left = printer.visit_logical_binary_expr(
        &a_and_b,
        Position::Operand(LogicalOperator::Or, Side::Left),
    );
    let right = c.accept(
        &mut printer,
        Position::Operand(LogicalOperator::Or, Side::Right),
    );
    assert_eq!(printed, printer.join(LogicalOperator::Or, &left, &right));
    assert_snapshot!(printed, @"a AND b OR c");
}

#[test]
fn test_shared_across_threads() {
    let left: ExprRef = Arc::new(Expr::and(Expr::column("a"), Expr::column("b")));
    let tree = Arc::new(Expr::or(left.clone(), Expr::column("c")));

    let printed: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let tree = Arc::clone(&tree);
                let left = Arc::clone(&left);
                scope.spawn(move || {
                    let logical = tree.as_logical_binary().unwrap();
                    assert!(Arc::ptr_eq(logical.left(), &left));
                    tree.to_string()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(printed.iter().all(|p| p == "a AND b OR c"));
}
