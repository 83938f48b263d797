use crate::{
	damage::{Damage, Die, Part},
	formula::Formula,
	parse,
	requirement::{Clause, Condition},
	Attrs,
};

#[test]
fn formula_precedence() {
	let formula: Formula = "1 + 2 * 3".parse().unwrap();
	assert_eq!(
		formula,
		Formula::Add(
			Box::new(Formula::Num(1)),
			Box::new(Formula::Mul(Box::new(Formula::Num(2)), Box::new(Formula::Num(3))))
		)
	);

	let formula: Formula = "(1 + 2) * 3".parse().unwrap();
	assert_eq!(formula.calc_with(0, |_| None).unwrap(), 9);

	let formula: Formula = "10 - 4 - 3".parse().unwrap();
	assert_eq!(formula.calc_with(0, |_| None).unwrap(), 3);
}

#[test]
fn formula_source_and_names() {
	let formula: Formula = "source * 2".parse().unwrap();
	assert_eq!(formula, Formula::mul(Formula::Source, Formula::Num(2)));

	let formula: Formula = "skills.Fighting".parse().unwrap();
	assert_eq!(formula, Formula::attr("skills.Fighting"));

	let formula: Formula = "sourceless".parse().unwrap();
	assert_eq!(formula, Formula::attr("sourceless"));
}

#[test]
fn formula_bracketed_names() {
	let formula: Formula = "2 + 2 * [features.Improved Arcane Resistance]".parse().unwrap();
	assert_eq!(
		formula,
		Formula::add(
			Formula::Num(2),
			Formula::mul(Formula::Num(2), Formula::attr("features.Improved Arcane Resistance"))
		)
	);
	assert_eq!(formula.to_string(), "2 + 2 * [features.Improved Arcane Resistance]");
}

#[test]
fn formula_step() {
	let formula: Formula = "step[2, 5, 9](source)".parse().unwrap();
	assert_eq!(formula, Formula::Step(vec![2, 5, 9], Box::new(Formula::Source)));
	assert_eq!(formula.to_string(), "step[2,5,9](source)");

	let formula: Formula = "step[-2](source) + 1".parse().unwrap();
	assert_eq!(formula.calc_with(1, |_| None).unwrap(), -1);
}

#[test]
fn formula_unary_minus() {
	let formula: Formula = "-source".parse().unwrap();
	assert_eq!(formula, Formula::Neg(Box::new(Formula::Source)));

	let formula: Formula = "2 - -3".parse().unwrap();
	assert_eq!(formula.calc_with(0, |_| None).unwrap(), 5);
}

#[test]
fn formula_errors() {
	assert!("".parse::<Formula>().is_err());
	assert!("1 +".parse::<Formula>().is_err());
	assert!("(1 + 2".parse::<Formula>().is_err());
	assert!("[unclosed".parse::<Formula>().is_err());
	assert!("step[](source)".parse::<Formula>().is_err());
	assert!("99999999999".parse::<Formula>().is_err());
}

#[test]
fn damage_with_strength() {
	let damage: Damage = "Str+d10".parse().unwrap();
	assert!(damage.strength);
	assert_eq!(damage.parts, [Part::Dice(Die::new(1, 10))]);
	assert_eq!(damage.implied_min_str(), 10);
	assert_eq!(damage.to_string(), "Str+d10");

	let damage: Damage = "Str+d4+d4".parse().unwrap();
	assert_eq!(damage.parts.len(), 2);
	assert_eq!(damage.step_die(), Some(Die::new(1, 4)));

	let damage: Damage = "Str".parse().unwrap();
	assert!(damage.strength);
	assert!(damage.parts.is_empty());
	assert_eq!(damage.implied_min_str(), 0);
}

#[test]
fn damage_without_strength() {
	let damage: Damage = "2d6-1".parse().unwrap();
	assert!(!damage.strength);
	assert_eq!(damage.parts, [Part::Dice(Die::new(2, 6)), Part::Bonus(-1)]);
	assert_eq!(damage.step_die(), None);
	assert_eq!(damage.to_string(), "2d6-1");

	let damage: Damage = "3d6 + 2".parse().unwrap();
	assert_eq!(damage.to_string(), "3d6+2");
}

#[test]
fn damage_errors() {
	let err = "d6+Str".parse::<Damage>().unwrap_err();
	assert!(err.details.contains("Str must be the first damage term"));

	let err = "Str-d6".parse::<Damage>().unwrap_err();
	assert!(err.details.contains("Dice can't be subtracted"));

	assert!("Str+".parse::<Damage>().is_err());
	assert!("".parse::<Damage>().is_err());
}

#[test]
fn clause_comparisons() {
	assert_eq!(
		"skills.Fighting >= 6".parse::<Clause>().unwrap(),
		Clause::Compare {
			attr: "skills.Fighting".to_owned(),
			cond: Condition::Gte(6),
		}
	);
	assert_eq!(
		"edges.Arcane Resistance=1".parse::<Clause>().unwrap(),
		Clause::Compare {
			attr: "edges.Arcane Resistance".to_owned(),
			cond: Condition::Eq(1),
		}
	);
	assert_eq!(
		"size < -1".parse::<Clause>().unwrap(),
		Clause::Compare {
			attr: "size".to_owned(),
			cond: Condition::Lt(-1),
		}
	);
}

#[test]
fn clauses_that_are_not_comparisons_stay_opaque() {
	for text in ["features.Brawler || features.Martial Artist", "!edges.Brawny", ">= 8", "strength"] {
		assert_eq!(Clause::read(text), Clause::Opaque(text.to_owned()));
	}
}

#[test]
fn clause_checks() {
	let clause = Clause::read("strength >= 8");
	assert_eq!(clause.check(|_| 8), Some(true));
	assert_eq!(clause.check(|_| 6), Some(false));
	assert_eq!(Clause::read("a || b").check(|_| 0), None);
	assert_eq!(clause.to_string(), "strength >= 8");
}

#[test]
fn error_problems_point_into_the_input() {
	let input = "Armor=2 Weight";
	let err = input.parse::<Attrs>().unwrap_err();
	assert!(!err.problems.is_empty());
	assert!(!err.details.is_empty());
	for problem in &err.problems {
		assert!(problem.span.start <= input.len());
		assert!(problem.span.end <= input.len());
	}
}

#[test]
fn parsers_are_reusable() {
	use chumsky::Parser as _;

	let parser = parse::formula();
	assert!(parser.parse("1 + 1").into_result().is_ok());
	assert!(parser.parse("1 +").into_result().is_err());
}
