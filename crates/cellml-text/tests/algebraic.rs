//! End-to-end assertions for simple algebraic equations, grounded on
//! `tests/test_algebraic.cc` and its fixtures in
//! `tests/expectedresultstrings.h`.

const EXPECTED_A_EQ_B: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<math xmlns="http://www.w3.org/1998/Math/MathML">
  <apply>
    <eq />
    <ci>
      a
    </ci>
    <ci>
      b
    </ci>
  </apply>
</math>
"#;

const EXPECTED_A_EQ_B_AND_C_EQ_D: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<math xmlns="http://www.w3.org/1998/Math/MathML">
  <apply>
    <eq />
    <ci>
      a
    </ci>
    <ci>
      b
    </ci>
  </apply>
  <apply>
    <eq />
    <ci>
      c
    </ci>
    <ci>
      d
    </ci>
  </apply>
</math>
"#;

const EXPECTED_A_EQ_B_AND_C_EQ_D_PLUS_E: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<math xmlns="http://www.w3.org/1998/Math/MathML">
  <apply>
    <eq />
    <ci>
      a
    </ci>
    <ci>
      b
    </ci>
  </apply>
  <apply>
    <eq />
    <ci>
      c
    </ci>
    <apply>
      <plus />
      <ci>
        d
      </ci>
      <exponentiale />
    </apply>
  </apply>
</math>
"#;

const EXPECTED_A_EQ_B_MINUS_NUMBER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<math xmlns="http://www.w3.org/1998/Math/MathML">
  <apply>
    <eq />
    <ci>
      a
    </ci>
    <apply>
      <minus />
      <ci>
        b
      </ci>
      <cn cellml:units="kilogram" xmlns:cellml="http://www.cellml.org/cellml/2.0#">
        5
      </cn>
    </apply>
  </apply>
</math>
"#;

const EXPECTED_A_EQ_B_PLUS_NUMBER_PLAIN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<math xmlns="http://www.w3.org/1998/Math/MathML">
  <apply>
    <eq />
    <ci>
      a
    </ci>
    <apply>
      <plus />
      <ci>
        b
      </ci>
      <cn>
        3
      </cn>
    </apply>
  </apply>
</math>
"#;

#[test]
fn a_eq_b() {
    assert_eq!(cellml_text::process("a = b;", true), EXPECTED_A_EQ_B);
}

#[test]
fn a_eq_b_and_c_eq_d() {
    assert_eq!(
        cellml_text::process("a = b;\nc = d;", true),
        EXPECTED_A_EQ_B_AND_C_EQ_D
    );
}

#[test]
fn a_eq_b_and_c_eq_d_plus_e() {
    assert_eq!(
        cellml_text::process("a = b;c = d + e;", true),
        EXPECTED_A_EQ_B_AND_C_EQ_D_PLUS_E
    );
}

#[test]
fn a_eq_b_minus_number_with_unit() {
    assert_eq!(
        cellml_text::process("a = b - 5{kilogram};", true),
        EXPECTED_A_EQ_B_MINUS_NUMBER
    );
}

#[test]
fn a_eq_b_plus_number_plain_mode_omits_units() {
    assert_eq!(
        cellml_text::process("a = b + 3;", false),
        EXPECTED_A_EQ_B_PLUS_NUMBER_PLAIN
    );
}
