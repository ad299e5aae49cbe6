pub const UI_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>XEM Mock Dashboard</title>
  <style>
    body { font-family: system-ui, -apple-system, Segoe UI, Roboto, sans-serif; margin: 0; background: #0b0f17; color: #e8eefb; }
    header { padding: 16px 20px; background: #0f1522; border-bottom: 1px solid #24304a; }
    h1 { font-size: 20px; margin: 0; }
    .wrap { padding: 18px; display: grid; grid-template-columns: 300px 1fr; gap: 18px; }
    section { background: #111827; border: 1px solid #263247; border-radius: 10px; padding: 14px; margin-bottom: 18px; }
    h2 { font-size: 16px; margin: 0 0 10px; color: #a0b7ff; }
    label { display:block; margin: 8px 0 4px; font-size: 13px; color:#9fb0cd }
    input, button, select { background:#0b1320; color:#e8eefb; border:1px solid #2a3a58; border-radius:8px; padding:8px 10px; font-size:14px; }
    button { cursor:pointer; }
    button.primary { background:#1b2a4a; border-color:#3a5aa0; }
    nav button.active { border-color:#9fe2b4; }
    table { width: 100%; border-collapse: collapse; font-size: 13px; }
    th, td { padding: 6px 8px; border-bottom: 1px solid #223150; text-align: left; vertical-align: top; }
    .row { display:flex; gap:8px; align-items:center; flex-wrap: wrap; }
    .muted { color:#8aa0bf; font-size:12px }
    .danger { color:#ff8a8a }
    .ok { color:#9fe2b4 }
    .mono { font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace; font-size:12px; word-break: break-all; }
    .tab { display:none }
    .tab.shown { display:block }
    pre { background:#0b1320; padding:10px; border-radius:8px; overflow:auto; font-size:12px }
  </style>
</head>
<body>
  <header>
    <h1>XEM Mock Dashboard</h1>
    <div class="muted">Serves pre-defined sample data only. No real node is contacted.</div>
  </header>
  <div class="wrap">
    <aside>
      <section>
        <h2>Data source</h2>
        <div class="ok">Mock data source</div>
        <label for="nodeUrl">Node URL</label>
        <div class="row"><input id="nodeUrl" class="mono" /><button id="setNode">Set</button></div>
      </section>
      <section>
        <h2>Accounts</h2>
        <div class="row"><input id="watchAddr" placeholder="Address" class="mono" /></div>
        <div class="row" style="margin-top:6px"><input id="watchLabel" placeholder="Label (optional)" /><button id="watch">Add</button></div>
        <label for="accountSelect">Selected</label>
        <select id="accountSelect" style="width:100%"></select>
        <div id="sessionMsg" class="muted"></div>
      </section>
      <section>
        <h2>Samples</h2>
        <div class="muted">Address</div><div id="sampleAddr" class="mono">-</div>
        <div class="muted" style="margin-top:6px">Hash</div><div id="sampleHash" class="mono">-</div>
      </section>
    </aside>
    <main>
      <nav class="row" style="margin-bottom:12px">
        <button data-tab="status" class="active">Node Status</button>
        <button data-tab="account">Account Info</button>
        <button data-tab="tx">Transaction Lookup</button>
        <button id="clearCache">Refresh</button>
      </nav>

      <section id="tab-status" class="tab shown">
        <h2>Node status &amp; chain info</h2>
        <button id="checkNode" class="primary">Show node status</button>
        <div id="statusOut" style="margin-top:10px"></div>
      </section>

      <section id="tab-account" class="tab">
        <h2>Account info</h2>
        <div class="row"><input id="accountInput" placeholder="Account address" class="mono" style="width:60%" /><button id="getAccount" class="primary">Look up</button></div>
        <div id="accountOut" style="margin-top:10px"></div>
      </section>

      <section id="tab-tx" class="tab">
        <h2>Transaction lookup</h2>
        <div class="row"><input id="txInput" placeholder="Transaction hash" class="mono" style="width:60%" /><button id="getTx" class="primary">Look up</button></div>
        <div id="txOut" style="margin-top:10px"></div>
      </section>
    </main>
  </div>

  <script>
    const $ = (id) => document.getElementById(id);
    const esc = (s) => String(s ?? '').replace(/[&<>"]/g, c => ({'&':'&amp;','<':'&lt;','>':'&gt;','"':'&quot;'}[c]));
    async function api(path, opts){
      const r = await fetch(path, opts);
      const body = await r.json().catch(() => ({ error: `HTTP ${r.status}` }));
      return { ok: r.ok, body };
    }
    function post(path, payload){
      return api(path, { method:'POST', headers:{'Content-Type':'application/json'}, body: JSON.stringify(payload || {}) });
    }
    function rows(pairs){
      return '<table>' + pairs.map(([k, v]) => `<tr><th>${esc(k)}</th><td class="mono">${esc(v)}</td></tr>`).join('') + '</table>';
    }
    function raw(obj){ return `<details><summary class="muted">Raw data</summary><pre>${esc(JSON.stringify(obj, null, 2))}</pre></details>`; }

    document.querySelectorAll('nav button[data-tab]').forEach(b => b.onclick = () => {
      document.querySelectorAll('nav button[data-tab]').forEach(x => x.classList.toggle('active', x === b));
      document.querySelectorAll('.tab').forEach(t => t.classList.toggle('shown', t.id === 'tab-' + b.dataset.tab));
    });

    function renderProbe(label, probe, summary){
      if (probe.error) return `<div class="danger">${esc(label)}: ${esc(probe.error)}</div>`;
      if (!probe.data) return `<div class="muted">${esc(label)}: no data</div>`;
      return `<div class="ok">${esc(label)}: ${esc(summary(probe.data))}</div>`;
    }
    $('checkNode').onclick = async () => {
      const { body } = await api('/api/status');
      $('statusOut').innerHTML =
        renderProbe('Heartbeat', body.heartbeat, d => d.message) +
        renderProbe('Chain height', body.chain_height, d => d.height) +
        renderProbe('Node info', body.node_info, d => `${d.nisInfo.application} ${d.nisInfo.version}`) +
        raw(body);
    };

    $('getAccount').onclick = async () => {
      const v = $('accountInput').value.trim();
      if (!v) { $('accountOut').innerHTML = '<div class="danger">Please enter an account address (try the sample address).</div>'; return; }
      const { ok, body } = await api('/api/account/' + encodeURIComponent(v));
      if (!ok) { $('accountOut').innerHTML = `<div class="danger">${esc(body.error)}</div>`; return; }
      const a = body.account;
      $('accountOut').innerHTML = `<div class="ok">Account ${esc(a.pretty_address)}</div>` + rows([
        [`Balance (${a.unit})`, a.balance],
        [`Vested balance (${a.unit})`, a.vested_balance],
        ['Importance', a.importance],
        ['Harvested blocks', a.harvested_blocks],
        ['Public key', a.public_key],
        ['Label', a.label],
        ['Status', a.status],
      ]) + raw(body.raw);
    };

    $('getTx').onclick = async () => {
      const v = $('txInput').value.trim().toLowerCase();
      if (!v) { $('txOut').innerHTML = '<div class="danger">Please enter a transaction hash (try the sample hash).</div>'; return; }
      const { ok, body } = await api('/api/transaction/' + encodeURIComponent(v));
      if (!ok) { $('txOut').innerHTML = `<div class="danger">${esc(body.error)}</div>`; return; }
      const t = body.transaction;
      const pairs = [
        ['Type', `${t.type_code} (${t.type_name})`],
        ['Block height', t.height],
        ['Time', t.time_utc],
        ['Sender public key', t.signer],
        ['Fee', `${t.fee} ${t.unit} (${t.fee_micro} micro)`],
      ];
      if (t.transfer) {
        pairs.push(['Recipient', t.transfer.recipient], ['Amount', `${t.transfer.amount} ${t.unit}`]);
        const m = t.transfer.message;
        if (!m) pairs.push(['Message', 'none']);
        else if (m.encoding === 'text') pairs.push(['Message (plain text)', m.text]);
        else pairs.push([`Message (hex, type ${m.kind})`, m.hex]);
      }
      $('txOut').innerHTML = `<div class="ok" title="${esc(t.hash)}">Transaction ${esc(t.short_hash)}</div>` + rows(pairs) + raw(body.raw);
    };

    function renderSession(s){
      $('nodeUrl').value = s.selected_node;
      const sel = $('accountSelect'); sel.innerHTML = '';
      s.accounts.forEach(a => {
        const o = document.createElement('option');
        o.value = a.address; o.textContent = a.short + (a.label ? ` (${a.label})` : '');
        o.selected = a.address === s.selected_address;
        sel.appendChild(o);
      });
      if (!s.accounts.length) $('sessionMsg').textContent = 'No accounts added yet.';
      else $('sessionMsg').textContent = '';
      if (s.selected_address) $('accountInput').value = s.selected_address;
    }
    $('watch').onclick = async () => {
      const { ok, body } = await post('/api/session/accounts', { address: $('watchAddr').value, label: $('watchLabel').value });
      if (ok) renderSession(body); else $('sessionMsg').textContent = body.error;
    };
    $('accountSelect').onchange = async (e) => {
      const { body } = await post('/api/session/select', { address: e.target.value });
      renderSession(body);
    };
    $('setNode').onclick = async () => {
      const { ok, body } = await post('/api/session/node', { url: $('nodeUrl').value });
      if (ok) renderSession(body); else $('sessionMsg').textContent = body.error;
    };
    $('clearCache').onclick = () => post('/api/cache/clear');

    (async function(){
      const s = await api('/api/samples');
      $('sampleAddr').textContent = s.body.address;
      $('sampleHash').textContent = s.body.hash;
      $('accountInput').placeholder = 'e.g. ' + s.body.address;
      $('txInput').placeholder = 'e.g. ' + s.body.hash;
      renderSession((await api('/api/session')).body);
    })();
  </script>
</body>
</html>"#;
