//! Sub-plan partitioning.
//!
//! A single document can hold several overlapping floor plans. Each element names the
//! sub-plans it belongs to through its `plan` attribute; sub-plans are identified by a
//! single character code.
use crate::*;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// The `plan` attribute of an element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlanTag<'a> {
    /// No `plan` attribute, the element is shared by every sub-plan.
    Unset,
    /// An attribute of an unrecognised type. Treated like [`PlanTag::Unset`].
    ForAll,
    /// Belongs to exactly one sub-plan.
    Code(&'a str),
    /// Per-code membership flags.
    PerCode(&'a Map<String, Value>),
}

impl<'a> PlanTag<'a> {
    pub fn of(v: Option<&'a Value>) -> Self {
        match v {
            None => PlanTag::Unset,
            Some(Value::String(s)) => PlanTag::Code(s),
            Some(Value::Object(m)) => PlanTag::PerCode(m),
            Some(_) => PlanTag::ForAll,
        }
    }

    /// Does a tagged element belong to the sub-plan `code`?
    pub fn admits(&self, code: &str) -> bool {
        match self {
            PlanTag::Unset | PlanTag::ForAll => true,
            PlanTag::Code(c) => *c == code,
            PlanTag::PerCode(m) => m.get(code).map(truthy).unwrap_or(false),
        }
    }

    /// The single letter of a [`PlanTag::Code`], if it is one.
    pub fn letter(&self) -> Option<char> {
        match self {
            PlanTag::Code(c) => single_char(c),
            _ => None,
        }
    }
}

/// Does `element` belong to the requested sub-plan?
///
/// With no requested code every element belongs. Non-record elements always belong.
pub fn belongs_to(element: &Value, code: Option<&str>) -> bool {
    let Some(code) = code else { return true };

    match element {
        Value::Object(attrs) => PlanTag::of(attrs.get("plan")).admits(code),
        _ => true,
    }
}

impl Record<'_> {
    pub fn belongs_to(&self, code: Option<&str>) -> bool {
        code.map(|c| self.tag().admits(c)).unwrap_or(true)
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut cs = s.chars();
    match (cs.next(), cs.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Find the sub-plan codes used across the plan, sorted.
///
/// Walls, rooms, items and rulers are scanned for string tags; items additionally contribute
/// the keys of a per-code mapping. Holes and ducts are never scanned. Only single character
/// codes are kept.
pub fn discover_codes(plan: &Plan) -> Vec<String> {
    let mut codes = BTreeSet::new();

    for kind in [Kind::Walls, Kind::Rooms, Kind::Items, Kind::Rulers] {
        for r in plan.records(kind) {
            match r.tag() {
                PlanTag::Code(c) => {
                    codes.insert(c);
                }
                PlanTag::PerCode(m) if kind == Kind::Items => {
                    codes.extend(m.keys().map(String::as_str));
                }
                _ => (),
            }
        }
    }

    codes
        .into_iter()
        .filter(|c| single_char(c).is_some())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plan(v: Value) -> Plan {
        Plan::from_document(json!({ "plan": v })).unwrap()
    }

    #[quickcheck]
    fn no_code_admits_everything(s: String, flag: bool, n: i64) -> bool {
        let mut flags = Map::new();
        flags.insert(s.clone(), json!(flag));

        [
            json!({}),
            json!({ "plan": s }),
            json!({ "plan": flags }),
            json!({ "plan": n }),
            json!({ "plan": null }),
            json!(s),
            json!([n]),
        ]
        .iter()
        .all(|e| belongs_to(e, None))
    }

    #[test]
    fn tag_variants() {
        assert_eq!(PlanTag::of(None), PlanTag::Unset);
        assert_eq!(PlanTag::of(Some(&json!("A"))), PlanTag::Code("A"));
        assert_eq!(PlanTag::of(Some(&json!(null))), PlanTag::ForAll);
        assert_eq!(PlanTag::of(Some(&json!(3))), PlanTag::ForAll);
        assert!(matches!(
            PlanTag::of(Some(&json!({ "A": true }))),
            PlanTag::PerCode(_)
        ));
    }

    #[test]
    fn membership() {
        let untagged = json!({ "name": "x" });
        let a = json!({ "plan": "A" });
        let flags = json!({ "plan": { "A": true, "B": 0, "C": "yes" } });
        let odd = json!({ "plan": [1, 2] });

        assert!(belongs_to(&untagged, Some("A")));
        assert!(belongs_to(&a, Some("A")));
        assert!(!belongs_to(&a, Some("B")));
        assert!(!belongs_to(&a, Some("a")));

        assert!(belongs_to(&flags, Some("A")));
        assert!(!belongs_to(&flags, Some("B")));
        assert!(belongs_to(&flags, Some("C")));
        assert!(!belongs_to(&flags, Some("D")));

        assert!(belongs_to(&odd, Some("A")));
        assert!(belongs_to(&json!("not a record"), Some("A")));
    }

    #[test]
    fn record_membership_matches_value_membership() {
        let v = json!({ "plan": { "B": 1 } });
        let r = Record::new("r", v.as_object().unwrap());
        for code in [None, Some("A"), Some("B")] {
            assert_eq!(r.belongs_to(code), belongs_to(&v, code));
        }
    }

    #[test]
    fn letters() {
        assert_eq!(PlanTag::Code("b").letter(), Some('b'));
        assert_eq!(PlanTag::Code("AB").letter(), None);
        assert_eq!(PlanTag::Code("").letter(), None);
        assert_eq!(PlanTag::Unset.letter(), None);
    }

    #[test]
    fn discover_from_rooms() {
        let p = plan(json!({
            "walls": { "w1": { "role": "wall" } },
            "rooms2": {
                "r1": { "plan": "B" },
                "r2": { "plan": "A" },
                "r3": { "plan": "B" },
            },
        }));
        assert_eq!(discover_codes(&p), ["A", "B"]);
    }

    #[test]
    fn discover_skips_holes_and_ducts() {
        let p = plan(json!({
            "walls": { "w1": { "holes": { "h1": { "plan": "H" } } } },
            "pipes_ventilation": { "p1": { "plan": "P" } },
        }));
        assert!(discover_codes(&p).is_empty());
    }

    #[test]
    fn discover_item_flag_keys() {
        let p = plan(json!({
            "items": {
                "i1": { "plan": { "C": false, "long": true } },
                "i2": { "plan": "A" },
            },
            "rulers": { "r1": { "plan": { "Z": true } } },
            "walls": { "w1": { "plan": { "Y": true } } },
        }));
        // only items contribute mapping keys, and only single characters survive
        assert_eq!(discover_codes(&p), ["A", "C"]);
    }

    #[test]
    fn discover_drops_long_codes() {
        let p = plan(json!({
            "walls": { "w1": { "plan": "AB" }, "w2": { "plan": "" } },
            "rulers": { "r1": { "plan": "R" } },
        }));
        assert_eq!(discover_codes(&p), ["R"]);
    }
}
