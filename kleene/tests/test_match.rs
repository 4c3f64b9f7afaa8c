use kleene::{parse_pattern, Branch, Expression, Order, Structure, ToStructures};

fn text(branch: &Branch<'_, char>) -> String {
    branch.iter().map(|item| *item.value()).collect()
}

fn texts(expression: &Expression<char>, input: &[Structure<char>]) -> Vec<String> {
    expression.run(input).map(|branch| text(&branch)).collect()
}

#[test]
fn alternation_order_follows_declaration_order() {
    let a = Expression::Constant('a');
    let b = Expression::Constant('b');
    let input = "a".to_structures();

    // Only one alternative matches: the same single branch either way.
    assert_eq!(
        texts(&Expression::Alternation(vec![a.clone(), b.clone()]), &input),
        vec!["a"]
    );
    assert_eq!(
        texts(&Expression::Alternation(vec![b, a]), &input),
        vec!["a"]
    );

    // Both alternatives match: declaration order decides branch order.
    let both = Expression::Alternation(vec![
        Expression::Repetition(Order::Greedy),
        Expression::Repetition(Order::Lazy),
    ]);
    let input = "ab".to_structures();
    let lengths: Vec<usize> = both.run(&input).map(|branch| branch.len()).collect();
    assert_eq!(lengths, vec![2, 1, 0, 0, 1, 2]);
}

#[test]
fn sequence_backtracks_through_a_repetition() {
    // a, any run, b: the repetition must give back input until `b` fits.
    let expression = parse_pattern("a*b").unwrap();
    let input = "axxb".to_structures();

    let branches: Vec<String> = texts(&expression, &input);
    assert_eq!(branches, vec!["axxb"]);
}

#[test]
fn greedy_and_lazy_agree_on_branches_but_not_on_order() {
    let greedy = parse_pattern("a*a").unwrap();
    let lazy = parse_pattern("a*?a").unwrap();
    let input = "aaa".to_structures();

    // Every branch consumes a prefix "a", a middle run, and one more "a";
    // both orders enumerate the same two ways of splitting "aaa".
    assert_eq!(texts(&greedy, &input), vec!["aaa", "aa"]);
    assert_eq!(texts(&lazy, &input), vec!["aa", "aaa"]);
}

#[test]
fn first_branch_of_a_combinatorial_pattern_is_cheap() {
    // Thirty stacked repetitions over fifty items have far more branches
    // than could ever be materialized; pulling one branch must not try.
    let expression = Expression::<char>::Sequence(vec![
        Expression::Repetition(Order::Greedy);
        30
    ]);
    let input = "x".repeat(50).to_structures();

    let first = expression.run(&input).next().unwrap();
    assert_eq!(first.len(), 50);
}

#[test]
fn runs_are_deterministic() {
    let expression = parse_pattern("*(a|b)*?").unwrap();
    let input = "abab".to_structures();

    let once: Vec<String> = texts(&expression, &input);
    let again: Vec<String> = texts(&expression, &input);
    assert_eq!(once, again);
}

#[test]
fn branches_share_input_nodes() {
    let expression = Expression::Alternation(vec![
        Expression::Constant('a'),
        Expression::Constant('a'),
    ]);
    let input = "a".to_structures();

    let branches: Vec<_> = expression.run(&input).collect();
    assert!(std::ptr::eq(branches[0][0], branches[1][0]));
}

#[test]
fn matching_works_over_tree_shaped_input() {
    // One item of the input carries a subtree; the engine matches on the
    // item's value and carries the subtree along in the branch.
    let input = vec![
        Structure::leaf('g'),
        Structure::node('r', [Structure::leaf('x'), Structure::leaf('y')]),
        Structure::leaf('y'),
    ];
    let expression = parse_pattern("g*y").unwrap();

    let branches: Vec<_> = expression.run(&input).collect();
    assert_eq!(branches.len(), 1);
    assert_eq!(branches[0].len(), 3);
    assert_eq!(branches[0][1].children().count(), 2);
}

#[test]
fn pattern_text_end_to_end() {
    let expression = parse_pattern("gr(e|a)y").unwrap();

    assert_eq!(texts(&expression, &"grey".to_structures()), vec!["grey"]);
    assert_eq!(texts(&expression, &"gray".to_structures()), vec!["gray"]);
    assert!(texts(&expression, &"groy".to_structures()).is_empty());
    // A branch must consume the expression, not the whole input.
    assert_eq!(texts(&expression, &"greyhound".to_structures()), vec!["grey"]);
}

#[test]
fn empty_input_matches_only_nullable_expressions() {
    let input: Vec<Structure<char>> = Vec::new();

    assert_eq!(Expression::<char>::Sequence(vec![]).run(&input).count(), 1);
    assert_eq!(
        Expression::<char>::Repetition(Order::Greedy).run(&input).count(),
        1
    );
    assert_eq!(Expression::Constant('a').run(&input).count(), 0);
    assert_eq!(Expression::<char>::Alternation(vec![]).run(&input).count(), 0);
}
