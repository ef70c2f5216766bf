use rysk_triggers::*;

fn everything() -> Inputs {
    Inputs {
        write: CsrWrite {
            payload: 0xFFFF_FFFFu32.into(),
            strobes: Strobes::all(),
        },
        fetch: FetchStage {
            pc: 0xFFFF_FFFFu32.into(),
            pointer: false,
            privilege: Privilege::Machine,
        },
        memory: MemoryStage {
            valid: true,
            address: 0xFFFF_FFFFu32.into(),
            access: Access::Store,
            size: AccessSize::Word,
            privilege: Privilege::Machine,
        },
        debug_mode: false,
    }
}

#[test]
fn builds_the_empty_unit() {
    let unit = build(&Config::new(0).unwrap()).unwrap();
    assert_eq!(unit.count(), 0);
}

#[test]
fn reads_are_zero_and_writes_vanish() {
    let mut unit = build(&Config::new(0).unwrap()).unwrap();
    for csr in TriggerCsr::ALL.iter().copied() {
        let outputs = unit.step(&Inputs {
            write: CsrWrite::to(csr, 0xFFFF_FFFF),
            ..Default::default()
        });
        assert_eq!(outputs.read(csr), 0u32.into());
        for csr in TriggerCsr::ALL.iter().copied() {
            assert_eq!(unit.evaluate(&Inputs::default()).0.read(csr), 0u32.into(), "{:?}", csr);
        }
    }
}

#[test]
fn never_matches() {
    let mut unit = NoTriggers;
    for _ in 0..4 {
        let (outputs, pending) = unit.evaluate(&everything());
        assert!(pending.is_empty());
        assert_eq!(outputs, Outputs::default());
        unit.commit(pending);
        assert!(!unit.step(&everything()).fetch_match);
    }
    unit.reset();
    assert!(!unit.evaluate(&everything()).0.memory_match);
}

#[test]
fn differs_from_a_single_trigger_unit() {
    // The same cycle on a one trigger unit does arm it; the empty unit has nothing to arm
    let mut single = Triggers::new(1).unwrap();
    single.step(&everything());
    assert!(single.evaluate(&everything()).0.fetch_match);
    assert_eq!(single.evaluate(&everything()).0.tinfo, 0x8040u32.into());

    let mut empty = NoTriggers;
    empty.step(&everything());
    assert!(!empty.evaluate(&everything()).0.fetch_match);
}
