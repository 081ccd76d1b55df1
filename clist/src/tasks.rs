//! The three task groups. Each drives the list through a fixed sequence of operations and writes
//! what it observes to a [`Transcript`].

use std::io::{self, Write};

use clap::ValueEnum;
use sllist::List;
use tracing::info;

use crate::transcript::{shown, shown_result, Transcript};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    /// Push, pop, front/back and clear
    #[value(name = "task1")]
    BasicOps,
    /// Indexed insert and erase, including out-of-range indices
    #[value(name = "task2")]
    InsertErase,
    /// Duplicate, transfer and assign-transfer
    #[value(name = "task3")]
    CopyMove,
}

impl Task {
    pub const ALL: [Task; 3] = [Task::BasicOps, Task::InsertErase, Task::CopyMove];
}

pub fn run<W: Write>(task: Task, t: &mut Transcript<W>) -> io::Result<()> {
    info!(?task, "running task");
    match task {
        Task::BasicOps => basic_ops(t),
        Task::InsertErase => insert_erase(t),
        Task::CopyMove => copy_move(t),
    }
}

fn front_back<W: Write>(t: &mut Transcript<W>, list: &List) -> io::Result<()> {
    t.line(format_args!(
        "front={} back={}",
        shown_result(list.front()),
        shown_result(list.back())
    ))
}

fn emptiness<W: Write>(t: &mut Transcript<W>, list: &List) -> io::Result<()> {
    t.line(format_args!("empty={} size={}", list.is_empty(), list.len()))
}

fn popped<W: Write>(t: &mut Transcript<W>, value: Option<i32>) -> io::Result<()> {
    t.line(format_args!("ok={} popped={}", value.is_some(), shown(value)))
}

fn ok<W: Write, T, E>(t: &mut Transcript<W>, result: Result<T, E>) -> io::Result<()> {
    t.line(format_args!("ok={}", result.is_ok()))
}

fn basic_ops<W: Write>(t: &mut Transcript<W>) -> io::Result<()> {
    t.section("start-task1")?;

    let mut lst = List::new();
    t.section("empty-list")?;
    emptiness(t, &lst)?;

    t.section("push_front_back")?;
    lst.push_front(2);
    lst.push_back(5);
    lst.push_front(1);
    t.list("after-push", &lst)?;

    t.section("front_back")?;
    front_back(t, &lst)?;

    t.section("pop_front")?;
    popped(t, lst.pop_front())?;
    t.list("after-pop", &lst)?;

    t.section("clear")?;
    lst.clear();
    emptiness(t, &lst)?;

    t.section("front_back_empty")?;
    front_back(t, &lst)?;
    popped(t, lst.pop_front())?;

    t.section("pop_last_then_push")?;
    let mut one = List::new();
    one.push_back(7);
    popped(t, one.pop_front())?;
    emptiness(t, &one)?;
    one.push_back(99);
    t.list("after-pop-last-then-push", &one)?;
    front_back(t, &one)
}

fn insert_erase<W: Write>(t: &mut Transcript<W>) -> io::Result<()> {
    t.section("start-task2")?;

    let mut lst: List = (1..=5).collect();
    t.list("seed", &lst)?;

    t.section("insert")?;
    ok(t, lst.insert(0, 100))?;
    ok(t, lst.insert(3, 200))?;
    ok(t, lst.insert(lst.len(), 300))?;
    ok(t, lst.insert(lst.len() + 1, 400))?;
    t.list("after-insert", &lst)?;

    t.section("erase")?;
    ok(t, lst.erase(0))?;
    ok(t, lst.erase(2))?;
    ok(t, lst.erase(lst.len() - 1))?;
    ok(t, lst.erase(lst.len()))?;
    t.list("after-erase", &lst)?;

    t.section("erase-tail-then-push")?;
    ok(t, lst.erase(lst.len() - 1))?;
    lst.push_back(999);
    t.list("after-erase-tail-then-push", &lst)?;
    front_back(t, &lst)
}

fn copy_move<W: Write>(t: &mut Transcript<W>) -> io::Result<()> {
    t.section("start-task3")?;

    let mut a: List = (0..4).map(|i| i * 10).collect();
    t.list("a", &a)?;

    t.section("copy-ctor")?;
    let b = a.duplicate();
    t.list("b", &b)?;

    t.section("modify-original")?;
    a.push_back(40);
    ok(t, a.erase(1))?;
    t.list("a-after", &a)?;
    t.list("b-unchanged", &b)?;

    t.section("move-ctor")?;
    let mut c = List::transfer_from(&mut a);
    t.list("c", &c)?;
    t.list("a-moved-from", &a)?;

    t.section("move-assign")?;
    let mut d = List::new();
    d.push_back(7);
    d.assign_transfer_from(&mut c);
    t.list("d", &d)?;
    t.list("c-moved-from", &c)?;

    t.section("moved-from-reuse")?;
    a.push_back(1);
    t.list("a-reused", &a)
}
