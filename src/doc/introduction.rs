/*!
# Introductory Tutorial

Start the `homebasic` executable in a terminal. You are ready when you
see the banner and the free memory report.
<pre><code>&nbsp;  6502 HomeComputer ready!
&nbsp;  32768 bytes free.
&nbsp;> █
</code></pre>

Type CTRL-D to leave and CTRL-C to stop a running program.

A line typed without a number runs immediately. This is direct mode.

<pre><code>&nbsp;> print "Hello World"
&nbsp;  Hello World
</code></pre>

A line that starts with a number between 0 and 65535 is stored in the
program instead. Typing the same number again replaces the line; typing
the number alone deletes it.

<pre><code>&nbsp;> 10 print "Hello World"
&nbsp;> 20 goto 10
&nbsp;> list
&nbsp;  10 print "Hello World"
&nbsp;  20 goto 10
&nbsp;  Ready.
&nbsp;> 20
&nbsp;> run
&nbsp;  Hello World
&nbsp;  Ready.
</code></pre>

Programs are stored on the program host with `SAVE` and read back with
`LOAD`. `DIR` shows what is stored.

<pre><code>&nbsp;> save "hello"
&nbsp;  Saving....
&nbsp;  Ready.
&nbsp;> new
&nbsp;> load "hello"
&nbsp;  Loading....
&nbsp;  Ready.
</code></pre>

Errors are shown in bold. Errors in a running program start with the
line number.

<pre><code>&nbsp;> 10 let a = 1 / 0
&nbsp;> run
&nbsp;  <b>10: Division by zero!</b>
&nbsp;  Ready.
</code></pre>

*/
