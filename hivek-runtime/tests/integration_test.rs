//! Engine-level integration tests
//!
//! Programs are assembled in memory with the shared encoder and run
//! through the public API.

use hivek_runtime::{RuntimeError, ScriptedConsole, Step, Vm, VmConfig};
use hivek_spec::{Instruction, Program, Register};

fn vm_with(instructions: &[Instruction]) -> Vm {
    let mut vm = Vm::new(VmConfig {
        stack_size: 4096,
        max_cycles: None,
    });
    vm.load_image(Program::from_instructions(instructions).unwrap());
    vm
}

fn run_steps(vm: &mut Vm, count: usize) {
    for _ in 0..count {
        vm.step().unwrap();
    }
}

// ============================================================================
// ALU
// ============================================================================

#[test]
fn test_alu_register_register() {
    let mut vm = vm_with(&[
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::A0,
            imm: 0b1100,
        },
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::A1,
            imm: 0b1010,
        },
        Instruction::And {
            ra: Register::A0,
            rb: Register::A1,
            rc: Register::T0,
        },
        Instruction::Or {
            ra: Register::A0,
            rb: Register::A1,
            rc: Register::T1,
        },
        Instruction::Xor {
            ra: Register::A0,
            rb: Register::A1,
            rc: Register::V0,
        },
        Instruction::Sub {
            ra: Register::A0,
            rb: Register::A1,
            rc: Register::V1,
        },
    ]);
    run_steps(&mut vm, 6);
    assert_eq!(vm.registers().read(Register::T0), 0b1000);
    assert_eq!(vm.registers().read(Register::T1), 0b1110);
    assert_eq!(vm.registers().read(Register::V0), 0b0110);
    assert_eq!(vm.registers().read(Register::V1), 2);
}

#[test]
fn test_alu_is_pure_in_its_sources() {
    // Same source registers, different history: identical results.
    let program = [
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::A0,
            imm: 100,
        },
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::A1,
            imm: 23,
        },
        Instruction::Add {
            ra: Register::A0,
            rb: Register::A1,
            rc: Register::V0,
        },
        Instruction::Add {
            ra: Register::A0,
            rb: Register::A1,
            rc: Register::V1,
        },
    ];
    let mut vm = vm_with(&program);
    run_steps(&mut vm, 4);
    assert_eq!(
        vm.registers().read(Register::V0),
        vm.registers().read(Register::V1)
    );
    assert_eq!(vm.registers().read(Register::V0), 123);
}

#[test]
fn test_immediates_are_sign_extended() {
    let mut vm = vm_with(&[
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::A0,
            imm: -1,
        },
        // andi with -16 keeps all but the low four bits.
        Instruction::Andi {
            ra: Register::A0,
            rb: Register::T0,
            imm: -16,
        },
        Instruction::Ori {
            ra: Register::ZERO,
            rb: Register::T1,
            imm: -2,
        },
        Instruction::Xori {
            ra: Register::A0,
            rb: Register::V0,
            imm: -1,
        },
    ]);
    run_steps(&mut vm, 4);
    assert_eq!(vm.registers().read(Register::A0), u64::MAX);
    assert_eq!(vm.registers().read(Register::T0), u64::MAX & !0xF);
    assert_eq!(vm.registers().read(Register::T1), (-2i64) as u64);
    assert_eq!(vm.registers().read(Register::V0), 0);
}

// ============================================================================
// Zero register
// ============================================================================

#[test]
fn test_writes_to_r0_are_discarded() {
    let mut vm = vm_with(&[
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::ZERO,
            imm: 77,
        },
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::A0,
            imm: 5,
        },
        Instruction::Add {
            ra: Register::A0,
            rb: Register::A0,
            rc: Register::ZERO,
        },
        Instruction::Jal { offset: 4 }, // link lands in ra, not r0
    ]);
    run_steps(&mut vm, 4);
    assert_eq!(vm.registers().read(Register::ZERO), 0);
    assert_eq!(vm.registers().read(Register::A0), 5);
}

// ============================================================================
// Branches and jumps
// ============================================================================

#[test]
fn test_blt_taken_adds_raw_displacement() {
    // regs[ra]=5, regs[rb]=3: taken (3 < 5 signed), ip += 2.
    let mut vm = vm_with(&[
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::A0,
            imm: 5,
        },
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::A1,
            imm: 3,
        },
        Instruction::Blt {
            ra: Register::A0,
            rb: Register::A1,
            offset: 2,
        },
    ]);
    run_steps(&mut vm, 3);
    assert_eq!(vm.ip(), 8 + 2);
}

#[test]
fn test_blt_not_taken_advances_by_stride() {
    // regs[ra]=3, regs[rb]=5: not taken, ip += 4.
    let mut vm = vm_with(&[
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::A0,
            imm: 3,
        },
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::A1,
            imm: 5,
        },
        Instruction::Blt {
            ra: Register::A0,
            rb: Register::A1,
            offset: 2,
        },
    ]);
    run_steps(&mut vm, 3);
    assert_eq!(vm.ip(), 8 + 4);
}

#[test]
fn test_blt_compares_signed() {
    let mut vm = vm_with(&[
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::A0,
            imm: 1,
        },
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::A1,
            imm: -1,
        },
        // rb = -1 < ra = 1 signed, even though -1 is huge unsigned.
        Instruction::Blt {
            ra: Register::A0,
            rb: Register::A1,
            offset: 8,
        },
    ]);
    run_steps(&mut vm, 3);
    assert_eq!(vm.ip(), 8 + 8);
}

#[test]
fn test_beq_bne() {
    let mut vm = vm_with(&[
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::A0,
            imm: 4,
        },
        Instruction::Beq {
            ra: Register::A0,
            rb: Register::A0,
            offset: 8,
        }, // taken: ip 4 -> 12
        Instruction::Halt, // skipped
        Instruction::Bne {
            ra: Register::A0,
            rb: Register::ZERO,
            offset: 8,
        }, // taken: ip 12 -> 20
        Instruction::Halt, // skipped
        Instruction::Bne {
            ra: Register::A0,
            rb: Register::A0,
            offset: 8,
        }, // not taken: ip 20 -> 24
    ]);
    run_steps(&mut vm, 4);
    assert_eq!(vm.ip(), 24);
}

#[test]
fn test_jal_links_and_jumps() {
    // JAL at ip = P: ra = P + 4, ip = P + D.
    let mut vm = vm_with(&[
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::A0,
            imm: 0,
        },
        Instruction::Jal { offset: 12 },
    ]);
    run_steps(&mut vm, 2);
    assert_eq!(vm.registers().read(Register::RA), 4 + 4);
    assert_eq!(vm.ip(), 4 + 12);
}

#[test]
fn test_jal_backward() {
    let mut vm = vm_with(&[
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::A0,
            imm: 0,
        },
        Instruction::Jal { offset: -4 },
    ]);
    run_steps(&mut vm, 2);
    assert_eq!(vm.ip(), 0);
    assert_eq!(vm.registers().read(Register::RA), 8);
}

// ============================================================================
// Memory
// ============================================================================

#[test]
fn test_sd_ld_roundtrip_through_different_register() {
    let mut vm = vm_with(&[
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::A0,
            imm: -1337,
        },
        Instruction::Sd {
            ra: Register::SP,
            rb: Register::A0,
            imm: -8,
        },
        Instruction::Ld {
            ra: Register::SP,
            rb: Register::V0,
            imm: -8,
        },
    ]);
    run_steps(&mut vm, 3);
    assert_eq!(vm.registers().read(Register::V0), (-1337i64) as u64);
    assert_eq!(
        vm.registers().read(Register::V0),
        vm.registers().read(Register::A0)
    );
}

#[test]
fn test_store_outside_stack_faults() {
    let mut vm = vm_with(&[Instruction::Sd {
        ra: Register::ZERO,
        rb: Register::ZERO,
        imm: 0x100,
    }]);
    match vm.step() {
        Err(RuntimeError::MemoryFault { address, len }) => {
            assert_eq!(address, 0x100);
            assert_eq!(len, 8);
        }
        other => panic!("expected memory fault, got {:?}", other),
    }
}

#[test]
fn test_store_into_program_image_faults() {
    let mut vm = vm_with(&[
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::A0,
            imm: 0,
        },
        Instruction::Sd {
            ra: Register::A0,
            rb: Register::A0,
            imm: 0,
        },
    ]);
    vm.step().unwrap();
    assert!(matches!(
        vm.step(),
        Err(RuntimeError::ReadOnlyImage { .. })
    ));
}

// ============================================================================
// Faults and the run loop
// ============================================================================

#[test]
fn test_reserved_format_terminates_run() {
    let mut vm = Vm::new(VmConfig::default());
    vm.load_image(Program::from_words(&[0x0000_0000]).unwrap());
    let mut console = ScriptedConsole::new();
    assert!(matches!(
        vm.run(&mut console),
        Err(RuntimeError::Decode(_))
    ));
}

#[test]
fn test_unknown_opcode_terminates_run() {
    // 24-bit format with unmapped opcode 0x06.
    let word = 0xC000_0000 | (0x06 << 23);
    let mut vm = Vm::new(VmConfig::default());
    vm.load_image(Program::from_words(&[word]).unwrap());
    let mut console = ScriptedConsole::new();
    assert!(matches!(
        vm.run(&mut console),
        Err(RuntimeError::Decode(_))
    ));
}

#[test]
fn test_run_halt_resumes_through_console() {
    let mut vm = Vm::new(VmConfig {
        stack_size: 4096,
        max_cycles: Some(8),
    });
    vm.load_image(
        Program::from_instructions(&[
            Instruction::Halt,
            Instruction::Beq {
                ra: Register::ZERO,
                rb: Register::ZERO,
                offset: 0,
            },
        ])
        .unwrap(),
    );
    let mut console = ScriptedConsole::new();
    let result = vm.run(&mut console).unwrap();
    assert_eq!(console.pauses, 1);
    assert_eq!(result.cycles, 8);
    assert_eq!(vm.ip(), 4); // spinning past the halt
}

#[test]
fn test_run_collects_syscall_output() {
    let mut vm = Vm::new(VmConfig {
        stack_size: 4096,
        max_cycles: Some(16),
    });
    vm.load_image(
        Program::from_instructions(&[
            Instruction::Addi {
                ra: Register::ZERO,
                rb: Register::R1,
                imm: 42,
            },
            Instruction::Syscall,
            Instruction::Addi {
                ra: Register::R1,
                rb: Register::R1,
                imm: 1,
            },
            Instruction::Syscall,
            Instruction::Beq {
                ra: Register::ZERO,
                rb: Register::ZERO,
                offset: 0,
            },
        ])
        .unwrap(),
    );
    let mut console = ScriptedConsole::new();
    vm.run(&mut console).unwrap();
    assert_eq!(console.outputs, vec![42, 43]);
}

#[test]
fn test_step_reports_output() {
    let mut vm = vm_with(&[
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::R1,
            imm: 7,
        },
        Instruction::Syscall,
    ]);
    assert_eq!(vm.step().unwrap(), Step::Continue);
    assert_eq!(vm.step().unwrap(), Step::Output(7));
}

// ============================================================================
// Loader
// ============================================================================

#[test]
fn test_load_missing_file() {
    let mut vm = Vm::new(VmConfig::default());
    let err = vm
        .load_program("/nonexistent/hivek/image.bin")
        .unwrap_err();
    assert!(matches!(err, hivek_runtime::LoadError::Io { .. }));
}

#[test]
fn test_load_rejects_empty_and_ragged_files() {
    let dir = std::env::temp_dir();

    let empty = dir.join("hivek-test-empty.bin");
    std::fs::write(&empty, []).unwrap();
    let mut vm = Vm::new(VmConfig::default());
    assert!(matches!(
        vm.load_program(&empty).unwrap_err(),
        hivek_runtime::LoadError::Image { .. }
    ));

    let ragged = dir.join("hivek-test-ragged.bin");
    std::fs::write(&ragged, [0xC0, 0x00, 0x00]).unwrap();
    assert!(matches!(
        vm.load_program(&ragged).unwrap_err(),
        hivek_runtime::LoadError::Image { .. }
    ));

    std::fs::remove_file(&empty).ok();
    std::fs::remove_file(&ragged).ok();
}

#[test]
fn test_load_from_file_and_run() {
    let image = Program::from_instructions(&[
        Instruction::Addi {
            ra: Register::ZERO,
            rb: Register::A0,
            imm: 11,
        },
        Instruction::Halt,
    ])
    .unwrap();

    let path = std::env::temp_dir().join("hivek-test-run.bin");
    std::fs::write(&path, image.as_bytes()).unwrap();

    let mut vm = Vm::new(VmConfig::default());
    vm.load_program(&path).unwrap();
    vm.step().unwrap();
    assert_eq!(vm.step().unwrap(), Step::Paused);
    assert_eq!(vm.registers().read(Register::A0), 11);

    std::fs::remove_file(&path).ok();
}
