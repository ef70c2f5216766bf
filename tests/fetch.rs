use rysk_triggers::*;

const M: u32 = 1 << 6;
const EXECUTE: u32 = 1 << 2;
const U: u32 = 1 << 3;

fn armed(match_mode: MatchMode, control: u32, tdata2: u32) -> Triggers {
    let mut unit = Triggers::new(1).unwrap();
    for (csr, value) in [
        (TriggerCsr::Tdata1, ((match_mode as u32) << 7) | control),
        (TriggerCsr::Tdata2, tdata2),
    ] {
        unit.step(&Inputs {
            write: CsrWrite::to(csr, value),
            ..Default::default()
        });
    }
    unit
}

fn fetch(unit: &Triggers, pc: u32, pointer: bool, privilege: Privilege, debug_mode: bool) -> bool {
    let inputs = Inputs {
        fetch: FetchStage {
            pc: pc.into(),
            pointer,
            privilege,
        },
        debug_mode,
        ..Default::default()
    };
    unit.evaluate(&inputs).0.fetch_match
}

fn fires(unit: &Triggers, pc: u32) -> bool {
    fetch(unit, pc, false, Privilege::Machine, false)
}

#[test]
fn match_modes_at_boundary() {
    let tdata2 = 0x8000_0100;
    for (mode, below, at, above) in [
        (MatchMode::Equal, false, true, false),
        (MatchMode::GreaterOrEqual, false, true, true),
        (MatchMode::Less, true, false, false),
    ] {
        let unit = armed(mode, M | EXECUTE, tdata2);
        assert_eq!(fires(&unit, tdata2 - 4), below, "{:?} below", mode);
        assert_eq!(fires(&unit, tdata2), at, "{:?} at", mode);
        assert_eq!(fires(&unit, tdata2 + 4), above, "{:?} above", mode);
    }
}

#[test]
fn comparison_is_unsigned() {
    let unit = armed(MatchMode::Less, M | EXECUTE, 0x8000_0000);
    assert!(fires(&unit, 0x7FFF_FFFE));
    assert!(!fires(&unit, 0xFFFF_FFFE));

    let unit = armed(MatchMode::GreaterOrEqual, M | EXECUTE, 0);
    assert!(fires(&unit, 0));
    assert!(fires(&unit, u32::MAX));
}

#[test]
fn suppressed_in_debug_mode() {
    let unit = armed(MatchMode::GreaterOrEqual, M | EXECUTE, 0);
    assert!(!fetch(&unit, 0x100, false, Privilege::Machine, true));
}

#[test]
fn ignores_table_jump_pointers() {
    let unit = armed(MatchMode::Equal, M | EXECUTE, 0x400);
    assert!(fires(&unit, 0x400));
    assert!(!fetch(&unit, 0x400, true, Privilege::Machine, false));
}

#[test]
fn needs_execute_and_machine_enable() {
    assert!(!fires(&armed(MatchMode::Equal, M, 0x400), 0x400));
    assert!(!fires(&armed(MatchMode::Equal, EXECUTE, 0x400), 0x400));
}

#[test]
fn never_fires_in_user_mode() {
    // u is tied to zero, so even asking for it leaves user mode unmatched
    let unit = armed(MatchMode::Equal, M | U | EXECUTE, 0x400);
    assert!(!fetch(&unit, 0x400, false, Privilege::User, false));
    assert!(fires(&unit, 0x400));
}

#[test]
fn arming_takes_effect_next_cycle() {
    let mut unit = Triggers::new(1).unwrap();
    unit.step(&Inputs {
        write: CsrWrite::to(TriggerCsr::Tdata2, 0x400),
        ..Default::default()
    });
    let inputs = Inputs {
        write: CsrWrite::to(TriggerCsr::Tdata1, M | EXECUTE),
        fetch: FetchStage {
            pc: 0x400u32.into(),
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(!unit.step(&inputs).fetch_match);
    assert!(unit.evaluate(&inputs).0.fetch_match);
}

#[test]
fn any_slot_raises_the_flag() {
    let mut unit = Triggers::new(4).unwrap();
    let control = ((MatchMode::Equal as u32) << 7) | M | EXECUTE;
    for (index, pc) in [0x100u32, 0x200, 0x300, 0x400].iter().enumerate() {
        for (csr, value) in [
            (TriggerCsr::Tselect, index as u32),
            (TriggerCsr::Tdata1, control),
            (TriggerCsr::Tdata2, *pc),
        ] {
            unit.step(&Inputs {
                write: CsrWrite::to(csr, value),
                ..Default::default()
            });
        }
    }
    for pc in [0x100, 0x200, 0x300, 0x400] {
        assert!(fetch(&unit, pc, false, Privilege::Machine, false), "pc {:#x}", pc);
    }
    assert!(!fetch(&unit, 0x500, false, Privilege::Machine, false));
}
