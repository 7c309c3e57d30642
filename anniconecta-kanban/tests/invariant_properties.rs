//! Property tests: drag reconciliation never loses, duplicates or reorders
//! tasks it was not asked to move.

use anniconecta_kanban::{reconcile, BoardContext, Column, ColumnId, DragItem, Task, TaskId};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Distribute `task_count` tasks over the six stages
fn board_strategy() -> impl Strategy<Value = Vec<Column>> {
    (0usize..12)
        .prop_flat_map(|task_count| prop::collection::vec(0usize..6, task_count))
        .prop_map(|assignment| {
            let mut buckets: Vec<Vec<Task>> = vec![Vec::new(); 6];
            for (i, column) in assignment.into_iter().enumerate() {
                buckets[column].push(Task::with_id(format!("t{i}"), format!("Task {i}")));
            }
            ColumnId::ALL
                .iter()
                .zip(buckets)
                .map(|(id, tasks)| Column::new(*id).with_tasks(tasks))
                .collect()
        })
}

#[derive(Debug, Clone)]
enum Event {
    Start(usize),
    Over(usize, Option<Target>),
    End(usize, Option<Target>),
}

#[derive(Debug, Clone)]
enum Target {
    Task(usize),
    Column(usize),
}

fn target_strategy() -> impl Strategy<Value = Option<Target>> {
    prop::option::of(prop_oneof![
        (0usize..14).prop_map(Target::Task),
        (0usize..6).prop_map(Target::Column),
    ])
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        (0usize..14).prop_map(Event::Start),
        (0usize..14, target_strategy()).prop_map(|(a, t)| Event::Over(a, t)),
        (0usize..14, target_strategy()).prop_map(|(a, t)| Event::End(a, t)),
    ]
}

fn to_item(target: &Target) -> DragItem {
    match target {
        Target::Task(i) => DragItem::task(format!("t{i}")),
        Target::Column(i) => DragItem::column(ColumnId::ALL[*i]),
    }
}

fn all_ids(columns: &[Column]) -> Vec<String> {
    columns
        .iter()
        .flat_map(|c| c.tasks.iter().map(|t| t.id.to_string()))
        .collect()
}

/// Task order within each column, ignoring one task
fn relative_orders(columns: &[Column], skip: &TaskId) -> Vec<Vec<String>> {
    columns
        .iter()
        .map(|c| {
            c.tasks
                .iter()
                .filter(|t| &t.id != skip)
                .map(|t| t.id.to_string())
                .collect()
        })
        .collect()
}

proptest! {
    #[test]
    fn test_event_sequences_preserve_partition(
        columns in board_strategy(),
        events in prop::collection::vec(event_strategy(), 0..25),
    ) {
        let expected: BTreeSet<String> = all_ids(&columns).into_iter().collect();
        let count = expected.len();
        let mut ctx = BoardContext::from_columns(columns).unwrap();

        for event in &events {
            match event {
                Event::Start(a) => {
                    ctx.on_drag_start(&DragItem::task(format!("t{a}")));
                }
                Event::Over(a, t) => {
                    let over = t.as_ref().map(to_item);
                    ctx.on_drag_over(&DragItem::task(format!("t{a}")), over.as_ref());
                }
                Event::End(a, t) => {
                    let over = t.as_ref().map(to_item);
                    ctx.on_drag_end(&DragItem::task(format!("t{a}")), over.as_ref());
                    prop_assert!(!ctx.session().is_dragging());
                }
            }

            let ids = all_ids(ctx.columns());
            prop_assert_eq!(ids.len(), count);
            let seen: BTreeSet<String> = ids.into_iter().collect();
            prop_assert_eq!(&seen, &expected);
        }
    }

    #[test]
    fn test_single_move_only_relocates_active_task(
        columns in board_strategy(),
        active in 0usize..12,
        target in target_strategy(),
    ) {
        let active = TaskId::from(format!("t{active}"));
        let over = target.as_ref().map(to_item);

        if let Some(planned) = reconcile(&columns, &active, over.as_ref()) {
            prop_assert_eq!(
                relative_orders(&columns, &active),
                relative_orders(&planned.columns, &active)
            );
            prop_assert_eq!(all_ids(&planned.columns).len(), all_ids(&columns).len());
        }
    }

    #[test]
    fn test_self_drop_is_identity(columns in board_strategy(), active in 0usize..12) {
        let id = TaskId::from(format!("t{active}"));
        let mut ctx = BoardContext::from_columns(columns.clone()).unwrap();
        let item = DragItem::Task(id);

        ctx.on_drag_start(&item);
        ctx.on_drag_over(&item, Some(&item));
        ctx.on_drag_end(&item, Some(&item));

        prop_assert_eq!(ctx.columns().as_slice(), columns.as_slice());
        prop_assert_eq!(ctx.revision(), 0);
    }
}
