//! React Query hooks layered over the service functions.
//!
//! GET endpoints get a `useQuery` hook keyed by `[slug(name), params]`.
//! POST, PUT, PATCH and DELETE endpoints get a `useMutation` hook that
//! invalidates every cached query on success, not only the ones of the
//! touched resource. HEAD and OPTIONS endpoints get no hook.

use apigen_common::{Endpoint, HttpMethod};

use super::CodegenConfig;
use super::ir::{
    Emit, ObjectEntry, TsExpr, TsFunction, TsImport, TsLiteral, TsModule, TsParam, TsPrimitive,
    TsProp, TsStmt, TsType,
};
use super::services::{doc_lines, service_function};
use super::types::EndpointTypes;
use crate::naming::{function_name, hook_name, slug};

const REACT_QUERY: &str = "@tanstack/react-query";

/// Which hook, if any, an endpoint gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HookKind {
    Query,
    Mutation,
}

impl HookKind {
    pub fn for_method(method: &HttpMethod) -> Option<Self> {
        if method.is_query() {
            Some(HookKind::Query)
        } else if method.is_mutation() {
            Some(HookKind::Mutation)
        } else {
            None
        }
    }
}

/// Service arguments a hook forwards: everything except `config`.
fn forwarded_params(service: &TsFunction) -> Vec<TsParam> {
    service
        .params
        .iter()
        .filter(|p| p.name != "config")
        .cloned()
        .collect()
}

fn string_literal(s: &str) -> TsType {
    TsType::Literal(TsLiteral::String(s.to_string()))
}

/// `Omit<Options<...>, 'a' | 'b'>`
fn omit(options: TsType, keys: &[&str]) -> TsType {
    let keys = if keys.len() == 1 {
        string_literal(keys[0])
    } else {
        TsType::Union(keys.iter().map(|k| string_literal(k)).collect())
    };
    TsType::Generic {
        name: "Omit".into(),
        args: vec![options, keys],
    }
}

/// `['get-users', { id, ...params }] as const`
fn query_key(endpoint: &Endpoint, forwarded: &[TsParam]) -> TsExpr {
    let mut items = vec![TsExpr::Literal(TsLiteral::String(slug(&endpoint.name)))];
    let others: Vec<&TsParam> = forwarded.iter().filter(|p| p.name != "params").collect();
    let has_params = forwarded.iter().any(|p| p.name == "params");

    if others.is_empty() {
        if has_params {
            items.push(TsExpr::ident("params"));
        }
    } else {
        let mut entries: Vec<ObjectEntry> = others
            .iter()
            .map(|p| ObjectEntry::Shorthand(p.name.clone()))
            .collect();
        if has_params {
            entries.push(ObjectEntry::Spread(TsExpr::ident("params")));
        }
        items.push(TsExpr::Object(entries));
    }

    TsExpr::Cast {
        expr: Box::new(TsExpr::Array(items)),
        ty: TsType::named("const"),
    }
}

fn query_hook(endpoint: &Endpoint, service: &TsFunction, result: TsType) -> TsFunction {
    let forwarded = forwarded_params(service);
    let call_args = forwarded.iter().map(|p| TsExpr::ident(&p.name)).collect();

    let mut params = forwarded.clone();
    params.push(TsParam {
        name: "options".into(),
        ty: Some(omit(
            TsType::generic("UseQueryOptions", result),
            &["queryKey", "queryFn"],
        )),
        optional: true,
    });

    let body = TsExpr::call(
        TsExpr::ident("useQuery"),
        vec![TsExpr::Object(vec![
            ObjectEntry::KeyValue("queryKey".into(), query_key(endpoint, &forwarded)),
            ObjectEntry::KeyValue(
                "queryFn".into(),
                TsExpr::Arrow {
                    params: vec![],
                    body: Box::new(TsExpr::call(TsExpr::ident(&service.name), call_args)),
                },
            ),
            ObjectEntry::Spread(TsExpr::ident("options")),
        ])],
    );

    TsFunction {
        name: hook_name(endpoint),
        docs: doc_lines(endpoint, format!("Query hook for `{}`.", service.name)),
        params,
        return_type: None,
        body: vec![TsStmt::Return(Some(body))],
        is_async: false,
        is_export: true,
    }
}

/// The mutation variables type and the `mutationFn` arrow forwarding them.
///
/// No inputs map to `void`, a lone `data` argument is passed through as is,
/// anything else is bundled in a `variables` object.
fn mutation_fn(service: &TsFunction) -> (TsType, TsExpr) {
    let forwarded = forwarded_params(service);
    let callee = TsExpr::ident(&service.name);

    match forwarded.as_slice() {
        [] => (
            TsType::Primitive(TsPrimitive::Void),
            TsExpr::Arrow {
                params: vec![],
                body: Box::new(TsExpr::call(callee, vec![])),
            },
        ),
        [only] if only.name == "data" => {
            let ty = only.ty.clone().unwrap_or_else(TsType::any);
            (
                ty.clone(),
                TsExpr::Arrow {
                    params: vec![TsParam {
                        name: "data".into(),
                        ty: Some(ty),
                        optional: false,
                    }],
                    body: Box::new(TsExpr::call(callee, vec![TsExpr::ident("data")])),
                },
            )
        }
        _ => {
            let ty = TsType::Object(
                forwarded
                    .iter()
                    .map(|p| TsProp {
                        name: p.name.clone(),
                        ty: p.ty.clone().unwrap_or_else(TsType::any),
                        optional: p.optional,
                        doc: None,
                    })
                    .collect(),
            );
            let args = forwarded
                .iter()
                .map(|p| TsExpr::member(TsExpr::ident("variables"), p.name.clone()))
                .collect();
            (
                ty.clone(),
                TsExpr::Arrow {
                    params: vec![TsParam {
                        name: "variables".into(),
                        ty: Some(ty),
                        optional: false,
                    }],
                    body: Box::new(TsExpr::call(callee, args)),
                },
            )
        }
    }
}

fn mutation_hook(endpoint: &Endpoint, service: &TsFunction, result: TsType) -> TsFunction {
    let (variables, mutation_fn) = mutation_fn(service);

    let options_type = TsType::Generic {
        name: "UseMutationOptions".into(),
        args: vec![result, TsType::named("Error"), variables],
    };
    let params = vec![TsParam {
        name: "options".into(),
        ty: Some(omit(options_type, &["mutationFn"])),
        optional: true,
    }];

    let on_success = TsExpr::Raw(
        "(...args) => { void queryClient.invalidateQueries(); return options?.onSuccess?.(...args); }"
            .to_string(),
    );
    let body = vec![
        TsStmt::Const {
            name: "queryClient".into(),
            ty: None,
            init: TsExpr::call(TsExpr::ident("useQueryClient"), vec![]),
        },
        TsStmt::Return(Some(TsExpr::call(
            TsExpr::ident("useMutation"),
            vec![TsExpr::Object(vec![
                ObjectEntry::Spread(TsExpr::ident("options")),
                ObjectEntry::KeyValue("mutationFn".into(), mutation_fn),
                ObjectEntry::KeyValue("onSuccess".into(), on_success),
            ])],
        ))),
    ];

    TsFunction {
        name: hook_name(endpoint),
        docs: doc_lines(endpoint, format!("Mutation hook for `{}`.", service.name)),
        params,
        return_type: None,
        body,
        is_async: false,
        is_export: true,
    }
}

/// Build the hook of one endpoint, if its method gets one.
pub(crate) fn endpoint_hook(
    endpoint: &Endpoint,
    types: &EndpointTypes,
    config: &CodegenConfig,
) -> Option<(HookKind, TsFunction)> {
    let kind = HookKind::for_method(&endpoint.method)?;
    let service = service_function(endpoint, types, config);
    let result = TsType::generic(
        "APIResponse",
        types
            .response
            .as_ref()
            .map_or(TsType::Primitive(TsPrimitive::Void), TsType::named),
    );
    let hook = match kind {
        HookKind::Query => query_hook(endpoint, &service, result),
        HookKind::Mutation => mutation_hook(endpoint, &service, result),
    };
    Some((kind, hook))
}

fn hook_imports(
    service_names: Vec<String>,
    mut used_types: Vec<String>,
    has_queries: bool,
    has_mutations: bool,
    config: &CodegenConfig,
) -> Vec<TsImport> {
    let mut runtime = Vec::new();
    let mut runtime_types = Vec::new();
    if has_queries {
        runtime.push("useQuery".to_string());
        runtime_types.push("UseQueryOptions".to_string());
    }
    if has_mutations {
        runtime.extend(["useMutation".to_string(), "useQueryClient".to_string()]);
        runtime_types.push("UseMutationOptions".to_string());
    }

    let mut imports = vec![
        TsImport {
            items: runtime,
            from: REACT_QUERY.into(),
            type_only: false,
        },
        TsImport {
            items: runtime_types,
            from: REACT_QUERY.into(),
            type_only: true,
        },
        TsImport {
            items: vec!["APIResponse".into()],
            from: config.client_module.clone(),
            type_only: true,
        },
        TsImport {
            items: service_names,
            from: config.services_module.clone(),
            type_only: false,
        },
    ];
    used_types.sort();
    used_types.dedup();
    if !used_types.is_empty() {
        imports.push(TsImport {
            items: used_types,
            from: config.types_module.clone(),
            type_only: true,
        });
    }
    imports
}

/// Generate the hooks artifact. `types` runs parallel to `endpoints`.
pub(crate) fn generate_hooks(
    endpoints: &[Endpoint],
    types: &[EndpointTypes],
    header: Vec<String>,
    config: &CodegenConfig,
) -> String {
    let mut module = TsModule {
        header,
        ..TsModule::default()
    };
    let mut service_names = Vec::new();
    let mut used_types = Vec::new();
    let mut has_queries = false;
    let mut has_mutations = false;

    for (endpoint, endpoint_types) in endpoints.iter().zip(types) {
        let Some((kind, hook)) = endpoint_hook(endpoint, endpoint_types, config) else {
            continue;
        };
        match kind {
            HookKind::Query => has_queries = true,
            HookKind::Mutation => has_mutations = true,
        }
        service_names.push(function_name(endpoint));
        used_types.extend(
            [
                &endpoint_types.params,
                &endpoint_types.request,
                &endpoint_types.response,
            ]
            .into_iter()
            .flatten()
            .cloned(),
        );
        module.functions.push(hook);
    }

    if !module.functions.is_empty() {
        service_names.sort();
        service_names.dedup();
        module.imports = hook_imports(
            service_names,
            used_types,
            has_queries,
            has_mutations,
            config,
        );
    }
    module.emit()
}
