//! End-to-end assertions for derivative equations, grounded on
//! `tests/test_odes.cc` and its fixtures in
//! `tests/expectedresultstrings.h`.

const EXPECTED_ODE_NO_ORDER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<math xmlns="http://www.w3.org/1998/Math/MathML">
  <apply>
    <eq />
    <apply>
      <diff />
      <bvar>
        <ci>
          t
        </ci>
      </bvar>
      <ci>
        x
      </ci>
    </apply>
    <cn cellml:units="dimensionless" xmlns:cellml="http://www.cellml.org/cellml/2.0#">
      3
    </cn>
  </apply>
</math>
"#;

const EXPECTED_ODE_NARY_TIMES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<math xmlns="http://www.w3.org/1998/Math/MathML">
  <apply>
    <eq />
    <apply>
      <diff />
      <bvar>
        <ci>
          t
        </ci>
      </bvar>
      <ci>
        y
      </ci>
    </apply>
    <apply>
      <minus />
      <apply>
        <times />
        <ci>
          mu
        </ci>
        <apply>
          <minus />
          <cn cellml:units="dimensionless" xmlns:cellml="http://www.cellml.org/cellml/2.0#">
            1
          </cn>
          <apply>
            <power />
            <ci>
              x
            </ci>
            <cn cellml:units="dimensionless" xmlns:cellml="http://www.cellml.org/cellml/2.0#">
              2
            </cn>
          </apply>
        </apply>
        <ci>
          y
        </ci>
      </apply>
      <ci>
        x
      </ci>
    </apply>
  </apply>
</math>
"#;

#[test]
fn derivative_with_no_order_as_lhs() {
    assert_eq!(
        cellml_text::process("ode(x, t) = 3{dimensionless};", true),
        EXPECTED_ODE_NO_ORDER
    );
}

#[test]
fn logistic_derivative_flattens_the_times_chain() {
    let xml = cellml_text::process("ode(y,t)=mu*(1{dimensionless}-sqr(x))*y-x;", true);
    assert_eq!(xml, EXPECTED_ODE_NARY_TIMES);
    // The three factors of `mu * (...) * y` sit under one <times/> apply
    // rather than a nested binary chain.
    assert_eq!(xml.matches("<times />").count(), 1);
}
