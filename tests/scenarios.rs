/*!
# Complexity Scenarios

End-to-end analysis of parser-shaped AST documents, compared against the full
output record.
*/

use complexity_analyzer::analyzer::ComplexityAnalyzer;
use complexity_analyzer::core::NO_TIGHT_BOUND;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

const SEQUENTIAL: &str = "Suma de complejidades secuenciales";

fn analyze(program: Value) -> Value {
    let report = ComplexityAnalyzer::new()
        .analyze_value(&program)
        .expect("analysis should succeed");
    serde_json::to_value(report).unwrap()
}

fn program(body: Vec<Value>) -> Value {
    json!({"type": "program", "body": body})
}

fn block(body: Vec<Value>) -> Value {
    json!({"type": "block", "body": body})
}

fn var(name: &str) -> Value {
    json!({"type": "var", "name": name})
}

fn num(value: &str) -> Value {
    json!({"type": "number", "value": value})
}

fn binop(op: &str, left: Value, right: Value) -> Value {
    json!({"type": "binop", "op": op, "left": left, "right": right})
}

fn compare(op: &str, left: Value, right: Value) -> Value {
    json!({"type": "comparison", "op": op, "left": left, "right": right})
}

fn assign(name: &str, value: Value) -> Value {
    json!({"type": "assignment", "var": var(name), "expr": value})
}

fn for_to_n(var_name: &str, body: Vec<Value>) -> Value {
    json!({"type": "for", "var": var_name, "start": num("1"), "end": var("n"), "body": block(body)})
}

fn if_then(condition: Value, then: Vec<Value>) -> Value {
    json!({"type": "if", "condition": condition, "then": block(then)})
}

fn if_then_else(condition: Value, then: Vec<Value>, otherwise: Vec<Value>) -> Value {
    json!({"type": "if", "condition": condition, "then": block(then), "else": block(otherwise)})
}

fn ret(value: Value) -> Value {
    json!({"type": "return", "value": value})
}

fn call(name: &str, args: Vec<Value>) -> Value {
    json!({"type": "call", "name": name, "args": args})
}

fn subroutine(name: &str, params: &[&str], body: Vec<Value>) -> Value {
    let params: Vec<Value> = params.iter().map(|p| var(p)).collect();
    json!({"type": "subroutine", "name": name, "params": params, "body": block(body)})
}

fn n_minus(k: &str) -> Value {
    binop("-", var("n"), num(k))
}

fn expected(
    o: &str,
    omega: &str,
    theta: &str,
    loops: &[&str],
    recursion: Option<&str>,
    early_exit: bool,
) -> Value {
    json!({
        "O": o,
        "Omega": omega,
        "Theta": theta,
        "details": {
            "loops": loops,
            "recursion": recursion,
            "combination": SEQUENTIAL,
            "early_exit_detected": early_exit
        }
    })
}

#[test]
fn single_loop_without_early_exit() {
    let result = analyze(program(vec![for_to_n(
        "i",
        vec![assign("x", binop("+", var("x"), var("i")))],
    )]));

    assert_eq!(
        result,
        expected("O(n)", "Ω(n)", "Θ(n)", &["Ciclo FOR → O(n)"], None, false)
    );
}

#[test]
fn nested_loops() {
    let result = analyze(program(vec![for_to_n(
        "i",
        vec![for_to_n("j", vec![assign("x", binop("+", var("x"), num("1")))])],
    )]));

    assert_eq!(
        result,
        expected(
            "O(n^2)",
            "Ω(n^2)",
            "Θ(n^2)",
            &["Ciclo FOR → O(n)", "Ciclo FOR → O(n)"],
            None,
            false
        )
    );
}

#[test]
fn loop_with_early_return() {
    let result = analyze(program(vec![for_to_n(
        "i",
        vec![if_then(compare("=", var("arr"), var("target")), vec![ret(var("i"))])],
    )]));

    assert_eq!(
        result,
        expected(
            "O(n)",
            "Ω(1)",
            NO_TIGHT_BOUND,
            &["Ciclo FOR con salida temprana → Ω(1), O(n)"],
            None,
            true
        )
    );
}

#[test]
fn repeat_until_loop() {
    let result = analyze(program(vec![json!({
        "type": "repeat",
        "body": block(vec![assign("x", binop("+", var("x"), num("1")))]),
        "condition": compare(">", var("x"), var("n"))
    })]));

    assert_eq!(
        result,
        expected("O(n)", "Ω(n)", "Θ(n)", &["Ciclo REPEAT → O(n)"], None, false)
    );
}

#[test]
fn if_then_is_constant() {
    let result = analyze(program(vec![if_then(
        compare(">", var("x"), num("0")),
        vec![assign("y", binop("+", var("y"), num("1")))],
    )]));

    assert_eq!(result, expected("O(1)", "Ω(1)", "Θ(1)", &[], None, false));
}

#[test]
fn linear_recursion() {
    let result = analyze(program(vec![subroutine(
        "recorrer",
        &["n"],
        vec![
            assign("x", binop("+", var("x"), num("1"))),
            call("recorrer", vec![n_minus("1")]),
        ],
    )]));

    assert_eq!(
        result,
        expected("O(n)", "Ω(n)", "Θ(n)", &[], Some("T(n) = T(n-1) + cost"), false)
    );
}

#[test]
fn factorial_base_case_is_not_an_early_exit() {
    let result = analyze(program(vec![subroutine(
        "factorial",
        &["n"],
        vec![
            if_then(compare("=", var("n"), num("0")), vec![ret(num("1"))]),
            ret(binop("*", var("n"), call("factorial", vec![n_minus("1")]))),
        ],
    )]));

    assert_eq!(
        result,
        expected("O(n)", "Ω(n)", "Θ(n)", &[], Some("T(n) = T(n-1) + cost"), false)
    );
}

#[test]
fn linked_list_walk_with_two_guards() {
    let result = analyze(program(vec![subroutine(
        "buscarNodo",
        &["nodo"],
        vec![
            if_then(compare("=", var("nodo"), json!({"type": "null"})), vec![ret(num("0"))]),
            assign("valor", json!({"type": "field_access", "object": "nodo", "field": "dato"})),
            assign("siguiente", json!({"type": "field_access", "object": "nodo", "field": "siguiente"})),
            if_then(compare("=", var("siguiente"), json!({"type": "null"})), vec![ret(var("valor"))]),
            ret(binop("+", var("valor"), call("buscarNodo", vec![var("siguiente")]))),
        ],
    )]));

    assert_eq!(
        result,
        expected("O(n)", "Ω(n)", "Θ(n)", &[], Some("T(n) = T(n-1) + cost"), false)
    );
}

#[test]
fn recursion_after_optional_exit_has_linear_worst_case() {
    // the guard comes after the only recursive call
    let result = analyze(program(vec![subroutine(
        "explorar",
        &["n"],
        vec![
            call("explorar", vec![n_minus("1")]),
            if_then(compare("=", var("n"), var("objetivo")), vec![ret(var("n"))]),
        ],
    )]));

    assert_eq!(
        result,
        expected(
            "O(n)",
            "Ω(1)",
            NO_TIGHT_BOUND,
            &[],
            Some("T(n) = T(n-1) + cost"),
            true
        )
    );
}

#[test]
fn fibonacci_is_exponential() {
    let result = analyze(program(vec![subroutine(
        "fibonacci",
        &["n"],
        vec![
            if_then(compare("<", var("n"), num("2")), vec![ret(var("n"))]),
            ret(binop(
                "+",
                call("fibonacci", vec![n_minus("1")]),
                call("fibonacci", vec![n_minus("2")]),
            )),
        ],
    )]));

    assert_eq!(
        result,
        expected(
            "O(2^n)",
            "Ω(2^n)",
            "Θ(2^n)",
            &[],
            Some("T(n) = 2T(n-1) + cost (exponencial)"),
            false
        )
    );
}

#[test]
fn hanoi_branching_factor_collapses_to_two_to_the_n() {
    let result = analyze(program(vec![subroutine(
        "hanoi",
        &["n"],
        vec![
            if_then(compare("=", var("n"), num("1")), vec![ret(num("1"))]),
            call("hanoi", vec![n_minus("1")]),
            call("hanoi", vec![n_minus("1")]),
            call("hanoi", vec![n_minus("1")]),
        ],
    )]));

    assert_eq!(
        result,
        expected(
            "O(2^n)",
            "Ω(2^n)",
            "Θ(2^n)",
            &[],
            Some("T(n) = 3T(n-1) + cost (exponencial)"),
            false
        )
    );
}

fn halving_process() -> Value {
    subroutine(
        "proceso",
        &["n"],
        vec![
            if_then(compare("=", var("n"), num("1")), vec![ret(num("1"))]),
            assign("mitad", binop("div", var("n"), num("2"))),
            call("proceso", vec![var("mitad")]),
        ],
    )
}

#[test]
fn halving_recursion_is_logarithmic() {
    let result = analyze(program(vec![halving_process()]));

    assert_eq!(
        result,
        expected(
            "O(log n)",
            "Ω(log n)",
            "Θ(log n)",
            &[],
            Some("T(n) = T(n/2) + cost"),
            false
        )
    );
}

#[test]
fn binary_search_with_exclusive_calls() {
    let result = analyze(program(vec![subroutine(
        "buscar",
        &["A", "lo", "hi", "x"],
        vec![
            if_then(compare(">", var("lo"), var("hi")), vec![ret(num("0"))]),
            assign("mid", binop("/", binop("+", var("lo"), var("hi")), num("2"))),
            if_then_else(
                compare("<", var("x"), var("mid")),
                vec![ret(call("buscar", vec![var("A"), var("lo"), var("mid"), var("x")]))],
                vec![ret(call("buscar", vec![var("A"), var("mid"), var("hi"), var("x")]))],
            ),
        ],
    )]));

    assert_eq!(result["O"], "O(log n)");
    assert_eq!(result["details"]["recursion"], "T(n) = T(n/2) + cost");
}

#[test]
fn simultaneous_halving_calls_are_exponential() {
    let result = analyze(program(vec![subroutine(
        "ordenar",
        &["A", "n"],
        vec![
            if_then(compare("<=", var("n"), num("1")), vec![ret(var("A"))]),
            call("ordenar", vec![var("A"), binop("div", var("n"), num("2"))]),
            call("ordenar", vec![var("A"), binop("div", var("n"), num("2"))]),
            for_to_n("i", vec![assign("x", binop("+", var("x"), num("1")))]),
        ],
    )]));

    assert_eq!(
        result,
        expected(
            "O(2^n)",
            "Ω(2^n)",
            "Θ(2^n)",
            &["Ciclo FOR → O(n)"],
            Some("T(n) = 2T(n-1) + cost (exponencial)"),
            false
        )
    );
}

#[test]
fn halving_subroutine_inside_loop() {
    let result = analyze(program(vec![for_to_n(
        "i",
        vec![subroutine(
            "busqueda",
            &["arr", "n"],
            vec![
                if_then(compare("=", var("n"), num("1")), vec![ret(var("arr"))]),
                assign("mitad", binop("div", var("n"), num("2"))),
                call("busqueda", vec![var("arr"), var("mitad")]),
            ],
        )],
    )]));

    assert_eq!(
        result,
        expected(
            "O(n log n)",
            "Ω(n log n)",
            "Θ(n log n)",
            &["Ciclo FOR → O(n)"],
            Some("T(n) = T(n/2) + cost"),
            false
        )
    );
}

#[test]
fn recursion_followed_by_loops_with_breaks() {
    let inner = for_to_n(
        "j",
        vec![if_then(
            compare("=", var("arr"), var("target")),
            vec![json!({"type": "break"})],
        )],
    );
    let outer = for_to_n(
        "i",
        vec![if_then_else(
            compare("=", binop("mod", var("i"), num("2")), num("0")),
            vec![inner],
            vec![call("proceso", vec![var("n")])],
        )],
    );

    let result = analyze(program(vec![halving_process(), outer]));

    assert_eq!(
        result,
        expected(
            "O(n^2)",
            "Ω(log n)",
            NO_TIGHT_BOUND,
            &[
                "Ciclo FOR con salida temprana → Ω(1), O(n)",
                "Ciclo FOR con salida temprana → Ω(1), O(n)"
            ],
            Some("T(n) = T(n/2) + cost"),
            true
        )
    );
}

#[test]
fn matrix_search_with_nested_exits() {
    let inner = for_to_n(
        "j",
        vec![
            if_then(
                compare("=", var("celda"), var("objetivo")),
                vec![assign("encontrado", json!({"type": "boolean", "value": "T"})), ret(var("i"))],
            ),
            if_then(
                compare(">", var("celda"), binop("*", var("objetivo"), num("2"))),
                vec![json!({"type": "break"})],
            ),
        ],
    );
    let outer = for_to_n(
        "i",
        vec![
            inner,
            if_then(
                compare("=", var("encontrado"), json!({"type": "boolean", "value": "T"})),
                vec![json!({"type": "break"})],
            ),
        ],
    );

    let result = analyze(program(vec![subroutine(
        "busquedaCompleja",
        &["matriz", "n", "objetivo"],
        vec![
            assign("encontrado", json!({"type": "boolean", "value": "F"})),
            outer,
            if_then(
                compare("=", var("encontrado"), json!({"type": "boolean", "value": "F"})),
                vec![ret(num("0"))],
            ),
        ],
    )]));

    assert_eq!(
        result,
        expected(
            "O(n^2)",
            "Ω(1)",
            NO_TIGHT_BOUND,
            &[
                "Ciclo FOR con salida temprana → Ω(1), O(n)",
                "Ciclo FOR con salida temprana → Ω(1), O(n)"
            ],
            None,
            true
        )
    );
}

#[test]
fn array_processing_is_linear() {
    let result = analyze(program(vec![subroutine(
        "procesarDatos",
        &["n"],
        vec![
            json!({"type": "array_decl", "name": "temp", "size": var("n")}),
            assign("suma", num("0")),
            for_to_n(
                "i",
                vec![
                    json!({"type": "assignment", "var": {"type": "var", "name": "temp", "access": [var("i")]}, "expr": binop("*", var("i"), num("2"))}),
                    assign("suma", binop("+", var("suma"), json!({"type": "var", "name": "temp", "access": [var("i")]}))),
                ],
            ),
            ret(var("suma")),
        ],
    )]));

    assert_eq!(
        result,
        expected("O(n)", "Ω(n)", "Θ(n)", &["Ciclo FOR → O(n)"], None, false)
    );
}

#[test]
fn string_concatenation_inside_loop_is_quadratic() {
    let result = analyze(program(vec![
        assign("s", json!({"type": "string", "value": ""})),
        for_to_n(
            "i",
            vec![assign("s", binop("+", var("s"), json!({"type": "string", "value": "*"})))],
        ),
    ]));

    assert_eq!(result["O"], "O(n^2)");
    assert_eq!(result["Theta"], "Θ(n^2)");
}

#[test]
fn text_processing_without_literals_stays_linear() {
    let result = analyze(program(vec![subroutine(
        "procesarTexto",
        &["texto"],
        vec![
            assign("n", json!({"type": "length", "value": var("texto")})),
            assign("resultado", json!({"type": "string", "value": ""})),
            for_to_n(
                "i",
                vec![
                    assign("char", json!({"type": "var", "name": "texto", "access": [var("i")]})),
                    assign("resultado", binop("+", var("resultado"), var("char"))),
                ],
            ),
            if_then_else(
                compare("=", var("resultado"), var("texto")),
                vec![ret(json!({"type": "boolean", "value": "T"}))],
                vec![ret(json!({"type": "boolean", "value": "F"}))],
            ),
        ],
    )]));

    assert_eq!(
        result,
        expected("O(n)", "Ω(n)", "Θ(n)", &["Ciclo FOR → O(n)"], None, false)
    );
}

#[test]
fn range_access_in_loop() {
    let slice = json!({
        "type": "var",
        "name": "A",
        "access": [{"type": "range", "start": num("1"), "end": var("i")}]
    });
    let result = analyze(program(vec![for_to_n("i", vec![assign("B", slice)])]));

    assert_eq!(result["O"], "O(n^2)");
}

#[test]
fn mutual_recursion_goes_undetected() {
    let result = analyze(program(vec![
        subroutine("par", &["n"], vec![ret(call("impar", vec![n_minus("1")]))]),
        subroutine("impar", &["n"], vec![ret(call("par", vec![n_minus("1")]))]),
    ]));

    assert_eq!(result["O"], "O(1)");
    assert_eq!(result["details"]["recursion"], Value::Null);
}

#[test]
fn last_recursive_subroutine_wins_in_details() {
    let result = analyze(program(vec![
        subroutine("lineal", &["n"], vec![call("lineal", vec![n_minus("1")])]),
        halving_process(),
    ]));

    assert_eq!(result["O"], "O(n)");
    assert_eq!(result["details"]["recursion"], "T(n) = T(n/2) + cost");
}

#[test]
fn unknown_and_malformed_leaves_are_constant() {
    let result = analyze(program(vec![
        json!({"type": "graph_class", "name": "Nodo", "attrs": ["valor", "siguiente"]}),
        json!({"type": "graph_instance", "name": "raiz"}),
        json!({"type": "print", "args": [var("x")]}),
        json!(42),
        json!("texto suelto"),
    ]));

    assert_eq!(result, expected("O(1)", "Ω(1)", "Θ(1)", &[], None, false));
}
