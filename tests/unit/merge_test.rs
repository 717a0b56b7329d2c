// Merge-patch semantics: absent fields never touch stored values, present
// fields overwrite exactly one attribute each.

use pagamento::modules::clientes::models::{Cliente, ClientePatch};
use pagamento::modules::parcelas::models::{Parcela, ParcelaPatch, StatusParcela};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn stored_parcela() -> Parcela {
    Parcela {
        id: Some(1),
        documento: Some(1),
        id_transacao: Some("X".to_string()),
        valor: Some(dec!(1.00)),
        numero: Some(1),
        total: Some(1),
        status: Some(StatusParcela::Pendente),
    }
}

#[test]
fn test_parcela_patch_worked_example() {
    // {valor=2.00, total=2, status=PAGO} leaves documento, idTransacao and
    // numero untouched
    let mut parcela = stored_parcela();
    let patch = ParcelaPatch {
        id: Some(1),
        valor: Some(dec!(2.00)),
        total: Some(2),
        status: Some(StatusParcela::Pago),
        ..Default::default()
    };

    parcela.apply_patch(&patch);

    assert_eq!(parcela.documento, Some(1));
    assert_eq!(parcela.id_transacao.as_deref(), Some("X"));
    assert_eq!(parcela.valor, Some(dec!(2.00)));
    assert_eq!(parcela.numero, Some(1));
    assert_eq!(parcela.total, Some(2));
    assert_eq!(parcela.status, Some(StatusParcela::Pago));
}

#[test]
fn test_parcela_empty_patch_leaves_record_unchanged() {
    let mut parcela = stored_parcela();
    parcela.apply_patch(&ParcelaPatch::default());

    let original = stored_parcela();
    assert_eq!(parcela.documento, original.documento);
    assert_eq!(parcela.id_transacao, original.id_transacao);
    assert_eq!(parcela.valor, original.valor);
    assert_eq!(parcela.numero, original.numero);
    assert_eq!(parcela.total, original.total);
    assert_eq!(parcela.status, original.status);
}

#[test]
fn test_cliente_patch_overwrites_single_field() {
    let mut cliente = Cliente {
        id: Some(1),
        nome: Some("Maria".to_string()),
        cpf: Some("12345678900".to_string()),
        email: Some("maria@example.com".to_string()),
        telefone: Some("11999990000".to_string()),
        curso_id: Some(3),
        parcela_id: Some(4),
    };

    let patch = ClientePatch {
        id: Some(1),
        telefone: Some("11888880000".to_string()),
        ..Default::default()
    };
    cliente.apply_patch(&patch);

    assert_eq!(cliente.nome.as_deref(), Some("Maria"));
    assert_eq!(cliente.cpf.as_deref(), Some("12345678900"));
    assert_eq!(cliente.email.as_deref(), Some("maria@example.com"));
    assert_eq!(cliente.telefone.as_deref(), Some("11888880000"));
    // associations are never part of the merge
    assert_eq!(cliente.curso_id, Some(3));
    assert_eq!(cliente.parcela_id, Some(4));
}

fn status_strategy() -> impl Strategy<Value = Option<StatusParcela>> {
    prop_oneof![
        Just(None),
        Just(Some(StatusParcela::Pendente)),
        Just(Some(StatusParcela::Pago)),
    ]
}

fn parcela_strategy() -> impl Strategy<Value = Parcela> {
    (
        any::<Option<i64>>(),
        any::<Option<i64>>(),
        proptest::option::of("[A-Z0-9]{1,12}"),
        proptest::option::of((0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))),
        any::<Option<i32>>(),
        any::<Option<i32>>(),
        status_strategy(),
    )
        .prop_map(
            |(id, documento, id_transacao, valor, numero, total, status)| Parcela {
                id,
                documento,
                id_transacao,
                valor,
                numero,
                total,
                status,
            },
        )
}

proptest! {
    /// An all-absent patch is the identity for any stored parcela
    #[test]
    fn prop_empty_patch_is_identity(parcela in parcela_strategy()) {
        let mut patched = parcela.clone();
        patched.apply_patch(&ParcelaPatch::default());

        prop_assert_eq!(patched.documento, parcela.documento);
        prop_assert_eq!(&patched.id_transacao, &parcela.id_transacao);
        prop_assert_eq!(patched.valor, parcela.valor);
        prop_assert_eq!(patched.numero, parcela.numero);
        prop_assert_eq!(patched.total, parcela.total);
        prop_assert_eq!(patched.status, parcela.status);
    }

    /// Patching valor touches valor and nothing else
    #[test]
    fn prop_valor_patch_touches_only_valor(
        parcela in parcela_strategy(),
        cents in 0i64..10_000_000,
    ) {
        let novo_valor = Decimal::new(cents, 2);
        let patch = ParcelaPatch {
            id: parcela.id,
            valor: Some(novo_valor),
            ..Default::default()
        };

        let mut patched = parcela.clone();
        patched.apply_patch(&patch);

        prop_assert_eq!(patched.valor, Some(novo_valor));
        prop_assert_eq!(patched.documento, parcela.documento);
        prop_assert_eq!(&patched.id_transacao, &parcela.id_transacao);
        prop_assert_eq!(patched.numero, parcela.numero);
        prop_assert_eq!(patched.total, parcela.total);
        prop_assert_eq!(patched.status, parcela.status);
    }
}
