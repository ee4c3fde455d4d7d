//! Snapshot tests for the generated Dart files.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use blocsmith_codegen::{GenerationMode, Generator};

/// Generate files and return (relative path, content) pairs in write order.
fn generate_files(mode: GenerationMode, name: &str) -> Vec<(String, String)> {
    Generator::new(mode, name, "/proj", true)
        .preview()
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect()
}

/// Get a specific file from the generated output.
fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_bloc_file() {
    let files = generate_files(GenerationMode::Bloc, "OrderSummary");
    let bloc = get_file(&files, "order_summary_bloc.dart").expect("bloc file not found");

    insta::assert_snapshot!(bloc, @r"
    import 'package:bloc/bloc.dart';

    import 'order_summary_event.dart';
    import 'order_summary_state.dart';

    class OrderSummaryBloc extends Bloc<OrderSummaryEvent, OrderSummaryState> {
      OrderSummaryBloc() : super(OrderSummaryState()) {
        on<InitEvent>(_init);
      }

      void _init(InitEvent event, Emitter<OrderSummaryState> emit) async {
        emit(state.clone());
      }
    }
    ");
}

#[test]
fn test_event_file() {
    let files = generate_files(GenerationMode::Bloc, "OrderSummary");
    let event = get_file(&files, "order_summary_event.dart").expect("event file not found");

    insta::assert_snapshot!(event, @r"
    abstract class OrderSummaryEvent {}

    class InitEvent extends OrderSummaryEvent {}
    ");
}

#[test]
fn test_state_file() {
    let files = generate_files(GenerationMode::Bloc, "OrderSummary");
    let state = get_file(&files, "order_summary_state.dart").expect("state file not found");

    insta::assert_snapshot!(state, @r"
    class OrderSummaryState {
      OrderSummaryState clone() {
        return OrderSummaryState();
      }
    }
    ");
}

#[test]
fn test_cubit_file() {
    let files = generate_files(GenerationMode::Cubit, "cart");
    let cubit = get_file(&files, "cart_cubit.dart").expect("cubit file not found");

    insta::assert_snapshot!(cubit, @r"
    import 'package:bloc/bloc.dart';

    import 'cart_state.dart';

    class CartCubit extends Cubit<CartState> {
      CartCubit() : super(CartState());
    }
    ");
}

#[test]
fn test_underscored_name_keeps_underscores_in_types() {
    let files = generate_files(GenerationMode::Bloc, "create_name");
    let paths: Vec<&str> = files.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(
        paths,
        [
            "create_name_bloc.dart",
            "create_name_event.dart",
            "create_name_state.dart"
        ]
    );

    let event = get_file(&files, "create_name_event.dart").expect("event file not found");
    insta::assert_snapshot!(event, @r"
    abstract class Create_NameEvent {}

    class InitEvent extends Create_NameEvent {}
    ");
}

#[test]
fn test_mode_file_counts() {
    assert_eq!(generate_files(GenerationMode::Bloc, "Cart").len(), 3);
    assert_eq!(generate_files(GenerationMode::Cubit, "Cart").len(), 2);
}
